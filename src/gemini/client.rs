// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use super::InferenceBackend;
use crate::config::{ApiKey, GeminiConfig};
use crate::error::{AppError, InferenceError, Result};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Google Generative Language API.
///
/// Built once at startup from an explicit [`GeminiConfig`]; holds the HTTP
/// connection pool, the model identifier and the API key.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
    api_key: ApiKey,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Fails with [`AppError::Config`] if no API key is configured, so a
    /// missing credential is reported before any request is attempted.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = match &config.api_key {
            Some(key) if !key.is_blank() => key.clone(),
            _ => {
                return Err(AppError::Config(
                    "Gemini API key is missing or blank".to_string(),
                ))
            }
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key,
        })
    }

    /// Model identifier serving every request.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        let error_resp = serde_json::from_str::<ErrorResponse>(response_text).ok()?;
        let error = error_resp.error?;
        error.message.or(error.status)
    }

    /// Call Gemini `generateContent` (blocking until the response arrives).
    async fn call(&self, request: &GenerateContentRequest) -> std::result::Result<String, InferenceError> {
        let url = self.endpoint();
        debug!("Calling generateContent API for model: {}", self.config.model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            let message = sanitize(&message);
            error!("Gemini API error: HTTP {} - {}", status, message);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        let gemini_response: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse Gemini response: {}", e);
                InferenceError::Parse(e)
            })?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                "Token usage: prompt={:?} candidates={:?} total={:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        gemini_response
            .text()
            .ok_or_else(|| InferenceError::EmptyResponse {
                reason: gemini_response.missing_text_reason(),
            })
    }
}

impl InferenceBackend for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> std::result::Result<String, InferenceError> {
        self.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> GeminiConfig {
        GeminiConfig {
            api_base_url: base.to_string(),
            api_key: Some(ApiKey::new("AIzaTest")),
            ..GeminiConfig::default()
        }
    }

    #[test]
    fn test_endpoint_format() {
        let client = GeminiClient::new(&config("https://example.test/v1beta/")).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_model_follows_config() {
        let mut cfg = config("https://example.test");
        cfg.model = "gemini-1.5-pro".to_string();
        let client = GeminiClient::new(&cfg).unwrap();
        assert_eq!(client.model(), "gemini-1.5-pro");
        assert!(client.endpoint().ends_with("/models/gemini-1.5-pro:generateContent"));
    }

    #[test]
    fn test_new_requires_api_key() {
        let mut cfg = config("https://example.test");
        cfg.api_key = None;
        assert!(matches!(GeminiClient::new(&cfg), Err(AppError::Config(_))));
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            GeminiClient::extract_error_message(body).as_deref(),
            Some("API key not valid.")
        );
        assert_eq!(GeminiClient::extract_error_message("<html>"), None);
    }
}
