//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Hugging Face API error: {0}")]
    AiProvider(String),

    #[error("Error processing paragraph {index}: {source}")]
    Paragraph {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the 1-based paragraph number that was being processed.
    pub fn in_paragraph(self, index: usize) -> Self {
        Error::Paragraph {
            index,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
