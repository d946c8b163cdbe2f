//! Persistence of generated images
//!
//! Writes each generated image to a sequentially numbered file.

pub mod file;
pub mod mock;

pub use file::FileImageStore;
pub use mock::MockImageStore;

use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Prefix of every generated file name.
pub const FILE_PREFIX: &str = "generated_image";

/// File name for the 1-based `index`, e.g. `generated_image_1.png`.
pub fn image_file_name(index: usize, extension: &str) -> String {
    format!("{}_{}.{}", FILE_PREFIX, index, extension)
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `image_data` as image number `index` and return where it went.
    async fn save_image(&self, index: usize, image_data: &[u8]) -> Result<PathBuf>;
}
