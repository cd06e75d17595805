//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application.
//! Logs always go to stderr so that stdout carries only the model's answer.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer.json())
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer.compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer.pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes Google API keys out of text before it is logged or displayed.
///
/// Google API keys start with `AIza` and are 39 characters long; every
/// occurrence is replaced with a `\[REDACTED_API_KEY\]` placeholder.
pub fn sanitize(input: &str) -> String {
    const PREFIX: &str = "AIza";

    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(PREFIX) {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        // Keys are URL-safe base64: alphanumerics, '-' and '_'
        let end = tail
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(tail.len());
        result.push_str("[REDACTED_API_KEY]");
        rest = &tail[end..];
    }

    result.push_str(rest);
    result
}
