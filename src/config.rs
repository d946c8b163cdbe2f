//! Runtime configuration
//!
//! Credentials and endpoint settings come from the environment (optionally
//! via a `.env` file); per-run choices such as the model and output directory
//! come from command-line flags.

use crate::prompts::PromptTemplate;
use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MODEL: &str = "black-forest-labs/FLUX.1-schnell";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const RECOMMENDED_MODELS: &[&str] = &[
    "black-forest-labs/FLUX.1-dev",
    "black-forest-labs/FLUX.1-schnell",
    "stabilityai/stable-diffusion-xl-base-1.0",
];

/// Checked in order; the lowercase name is the one the original tool used.
const API_KEY_VARS: &[&str] = &["huggingface_api_key", "HUGGINGFACE_API_KEY"];

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    pub output_dir: PathBuf,
    pub prompt: PromptTemplate,
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        let api_url = lookup("HUGGINGFACE_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("HUGGINGFACE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(Error::Config(
                        "HUGGINGFACE_TIMEOUT_SECS must be at least 1 second".to_string(),
                    ))
                }
                Ok(secs) => secs,
                Err(_) => {
                    return Err(Error::Config(format!(
                        "HUGGINGFACE_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    )))
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            api_url,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(timeout_secs),
            output_dir: PathBuf::from("."),
            prompt: PromptTemplate::default(),
            dry_run: false,
        })
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the bearer token, failing when a live run has none.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "No API token found; set {} (or {})",
                API_KEY_VARS[0], API_KEY_VARS[1]
            ))
        })
    }

    /// Full endpoint for the configured model, e.g. `.../models/org/name`.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.api_url, self.model)
    }
}
