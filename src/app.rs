//! Application orchestration: one image per paragraph, in file order.

use crate::ai::{HuggingFaceImageClient, ImageGenerationService, MockImageGenerationClient};
use crate::config::Config;
use crate::paragraphs::Paragraphs;
use crate::prompts::PromptTemplate;
use crate::storage::{FileImageStore, ImageStore, MockImageStore};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// One image written during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedImage {
    /// 1-based paragraph number.
    pub index: usize,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub paragraphs: usize,
    pub images: Vec<SavedImage>,
}

/// Drives paragraph splitting, image generation and storage.
pub struct App {
    image_gen: Box<dyn ImageGenerationService>,
    store: Box<dyn ImageStore>,
    prompt: PromptTemplate,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub image_gen: Box<dyn ImageGenerationService>,
    pub store: Box<dyn ImageStore>,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices, prompt: PromptTemplate) -> Self {
        Self {
            image_gen: services.image_gen,
            store: services.store,
            prompt,
        }
    }

    /// Construct an app from resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let services = if config.dry_run {
            info!("Dry run enabled: no requests will be sent and no files written");
            AppServices {
                image_gen: Box::new(MockImageGenerationClient::new()),
                store: Box::new(MockImageStore::new().with_base_path(config.output_dir.clone())),
            }
        } else {
            let http_client = reqwest::Client::new();
            let image_gen = HuggingFaceImageClient::from_config(config, http_client)?;
            info!("Image provider: Hugging Face ({})", image_gen.endpoint());

            let store = FileImageStore::new(&config.output_dir);
            info!("Writing images to {}", store.output_dir().display());

            AppServices {
                image_gen: Box::new(image_gen),
                store: Box::new(store),
            }
        };

        Ok(Self::with_services(services, config.prompt.clone()))
    }

    /// Generate and save one image per paragraph of `input`.
    ///
    /// Stops at the first failing paragraph; images already written stay on disk.
    pub async fn run(&self, input: &Path) -> Result<RunSummary> {
        let bytes = tokio::fs::read(input)
            .await
            .map_err(|source| Error::Input {
                path: input.to_path_buf(),
                source,
            })?;
        // Invalid UTF-8 (e.g. Latin-1 input) is replaced, not rejected.
        let text = String::from_utf8_lossy(&bytes);

        info!("Reading paragraphs from {}", input.display());

        let mut summary = RunSummary::default();
        for (offset, paragraph) in Paragraphs::new(&text).enumerate() {
            let index = offset + 1;
            summary.paragraphs = index;

            match self.process_paragraph(&paragraph, index).await {
                Ok(saved) => summary.images.push(saved),
                Err(e) => {
                    error!("Failed on paragraph {}: {}", index, e);
                    return Err(e.in_paragraph(index));
                }
            }
        }

        info!(
            "All images have been generated and saved ({} paragraphs)",
            summary.paragraphs
        );
        Ok(summary)
    }

    async fn process_paragraph(&self, paragraph: &str, index: usize) -> Result<SavedImage> {
        info!("Generating image for paragraph {}: {}", index, paragraph);

        let prompt = self.prompt.build(paragraph);
        let image_data = self.image_gen.generate_image(&prompt).await?;
        let path = self.store.save_image(index, &image_data).await?;

        info!(
            "Image for paragraph {} successfully saved as {}",
            index,
            path.display()
        );

        Ok(SavedImage {
            index,
            path,
            bytes: image_data.len(),
        })
    }
}
