// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Environment variable holding the Generative Language API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables with the `ANIMAL_LENS_` prefix (highest)
    /// 2. Config file (`path`, or `~/.animal-lens/config.toml`)
    /// 3. `GOOGLE_API_KEY` for the credential
    /// 4. Defaults (lowest)
    ///
    /// CLI overrides are applied by the caller afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, std::env::var(API_KEY_ENV).ok())
    }

    /// Same as [`AppConfig::load`] with the `GOOGLE_API_KEY` value supplied
    /// explicitly.
    pub fn load_with(path: Option<&Path>, google_api_key: Option<String>) -> Result<Self> {
        let file = match path {
            // An explicitly named file must exist
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::from(Self::default_config_path()).required(false),
        };

        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?);

        if let Some(key) = google_api_key {
            builder = builder.set_default("gemini.api_key", key)?;
        }

        let config = builder
            .add_source(file)
            // e.g. ANIMAL_LENS_GEMINI__MODEL, ANIMAL_LENS_LOGGING__LEVEL
            .add_source(
                Environment::with_prefix("ANIMAL_LENS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Returns the API key, or fails before any request can be attempted.
    pub fn require_api_key(&self) -> Result<&ApiKey> {
        match &self.gemini.api_key {
            Some(key) if !key.is_blank() => Ok(key),
            _ => Err(AppError::Config(format!(
                "no Gemini API key configured; set {} or gemini.api_key in {}",
                API_KEY_ENV,
                Self::default_config_path().display()
            ))),
        }
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".animal-lens")
            .join("config.toml")
    }
}
