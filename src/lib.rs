//! Illustrates text files with a Hugging Face image model
//!
//! Splits an input file into paragraphs, asks a hosted text-to-image model
//! for one illustration per paragraph, and writes the returned images to
//! sequentially numbered files.

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod paragraphs;
pub mod prompts;
pub mod storage;

pub use error::{Error, Result};
