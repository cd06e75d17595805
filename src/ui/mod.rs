// Terminal presentation of previews, answers and errors
// Author: kelexine (https://github.com/kelexine)

use crate::error::{AppError, Result};
use crate::utils::logging::sanitize;
use crate::vision::ImagePreview;
use std::error::Error as _;
use std::io::{self, Write};

/// Warning shown for any rejected input.
pub const VALIDATION_WARNING: &str = "Please upload an image and enter a valid question.";

pub fn render_preview<W: Write>(out: &mut W, preview: &ImagePreview) -> io::Result<()> {
    writeln!(out, "Uploaded image: {}", preview)
}

/// Render the result of one submission.
///
/// Answers go out verbatim under a `Response:` heading; failures print a
/// message and the full cause chain.
pub fn render_outcome<W: Write>(out: &mut W, outcome: &Result<String>) -> io::Result<()> {
    match outcome {
        Ok(answer) => {
            writeln!(out, "Response:")?;
            write!(out, "{}", answer)?;
            if !answer.ends_with('\n') {
                writeln!(out)?;
            }
            Ok(())
        }
        Err(AppError::Validation(reason)) => {
            writeln!(out, "Warning: {} ({})", VALIDATION_WARNING, reason)
        }
        Err(err) => writeln!(out, "Error: {}", describe(err)),
    }
}

/// Error message with its source chain, API keys redacted.
pub fn describe(err: &AppError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        // Wrapping variants already print their direct cause
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    sanitize(&message)
}
