use super::{image_file_name, ImageStore};
use crate::ai::{detect_image_mime, extension_for_mime};
use crate::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FileImageStore {
    output_dir: PathBuf,
}

impl FileImageStore {
    /// Create a store rooted at `output_dir`. The directory is created on
    /// the first save.
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl ImageStore for FileImageStore {
    async fn save_image(&self, index: usize, image_data: &[u8]) -> Result<PathBuf> {
        let extension = extension_for_mime(detect_image_mime(image_data));
        let path = self.output_dir.join(image_file_name(index, extension));

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, image_data).await?;
        tracing::debug!("Wrote {} bytes to {}", image_data.len(), path.display());

        Ok(path)
    }
}
