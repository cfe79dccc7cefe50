// src/lib.rs

pub mod config;
pub mod extract;
pub mod gemini;
pub mod normalize;
pub mod project;
pub mod prompt;
pub mod service;
pub mod types;

// Re-export for easy use elsewhere
pub use config::StudioConfig;
pub use gemini::{GeminiClient, InferenceError, RequestMode, TextGenerator};
pub use service::StudioService;
