//! Input collection: the uploaded image and the user's question.
//!
//! An upload is captured into an owned buffer exactly once ([`Upload`]);
//! the preview borrows that buffer and [`collect`] then takes ownership of
//! it to build the [`PromptRequest`].
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod upload;

pub use upload::{Upload, STDIN_PATH};

use crate::error::ValidationError;
use crate::vision::models::{validate_image_size, ImageFormat};

/// Fixed persona sent ahead of every question.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert animal biologist and zoologist. \
You will receive animal images as input and your task is to answer the questions \
based on the input image.";

/// Raw image bytes plus their MIME type. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: &str) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::EmptyImage);
        }
        validate_image_size(bytes.len())?;

        let format = ImageFormat::from_mime_type(mime_type)
            .ok_or_else(|| ValidationError::UnsupportedFormat(mime_type.to_string()))?;

        Ok(Self {
            bytes,
            mime_type: format.mime_type().to_string(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// A validated submission, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub system_instruction: &'static str,
    /// Trimmed, never empty.
    pub question: String,
    pub image: ImagePayload,
}

/// Validate raw inputs into a [`PromptRequest`].
///
/// `bytes` is `None` when nothing was uploaded.
pub fn collect(
    bytes: Option<Vec<u8>>,
    mime_type: &str,
    question: &str,
) -> Result<PromptRequest, ValidationError> {
    let bytes = bytes.ok_or(ValidationError::MissingImage)?;
    let image = ImagePayload::new(bytes, mime_type)?;

    let question = question.trim();
    if question.is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }

    Ok(PromptRequest {
        system_instruction: SYSTEM_INSTRUCTION,
        question: question.to_string(),
        image,
    })
}
