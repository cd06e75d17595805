// Error types for animal-lens
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

/// Input rejected before any request is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no image was uploaded")]
    MissingImage,

    #[error("uploaded image is empty")]
    EmptyImage,

    #[error("question is empty")]
    EmptyQuestion,

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("image is {size} bytes once base64-encoded, over the {max} byte request limit (20MB)")]
    TooLarge { size: usize, max: usize },
}

/// Failure of the outbound model call. The underlying cause is kept as `source()`.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Response parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gemini returned no text answer (reason: {reason})")]
    EmptyResponse { reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("A submission is already in flight")]
    Busy,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Process exit code used by one-shot mode.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
