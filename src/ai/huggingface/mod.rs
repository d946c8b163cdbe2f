pub mod client;
pub mod image;
pub mod types;

pub use client::HuggingFaceHttpClient;
pub use image::HuggingFaceImageClient;
