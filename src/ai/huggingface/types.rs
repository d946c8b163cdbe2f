//! Hugging Face inference payload types.

use serde::{Deserialize, Serialize};

/// Request body for text-to-image inference.
#[derive(Debug, Serialize)]
pub struct ImageRequest {
    pub inputs: String,
}

/// Error envelope returned by the inference API on failure.
///
/// `estimated_time` is set while a cold model is still loading.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
