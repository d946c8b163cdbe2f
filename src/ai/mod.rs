//! AI service integration for image generation
//!
//! Provides the image generation seam used by the app and a client for the
//! Hugging Face hosted inference API.

pub mod huggingface;
pub mod mime;
pub mod mock;

pub use huggingface::HuggingFaceImageClient;
pub use mime::{detect_image_mime, extension_for_mime};
pub use mock::MockImageGenerationClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}
