use super::{image_file_name, ImageStore};
use crate::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// In-memory store keyed by image index.
#[derive(Clone)]
pub struct MockImageStore {
    images: Arc<Mutex<BTreeMap<usize, Vec<u8>>>>,
    base_path: PathBuf,
    fail_on: Option<usize>,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self {
            images: Arc::new(Mutex::new(BTreeMap::new())),
            base_path: PathBuf::from("/tmp"),
            fail_on: None,
        }
    }

    pub fn with_base_path(mut self, path: PathBuf) -> Self {
        self.base_path = path;
        self
    }

    /// Fail when asked to save image number `index`.
    pub fn with_failure_on(mut self, index: usize) -> Self {
        self.fail_on = Some(index);
        self
    }

    pub fn get_save_count(&self) -> usize {
        self.images.lock().unwrap().len()
    }

    pub fn get_images(&self) -> BTreeMap<usize, Vec<u8>> {
        self.images.lock().unwrap().clone()
    }
}

impl Default for MockImageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for MockImageStore {
    async fn save_image(&self, index: usize, image_data: &[u8]) -> Result<PathBuf> {
        if self.fail_on == Some(index) {
            return Err(crate::Error::Io(std::io::Error::other("Mock failure")));
        }

        self.images
            .lock()
            .unwrap()
            .insert(index, image_data.to_vec());
        Ok(self.base_path.join(image_file_name(index, "png")))
    }
}
