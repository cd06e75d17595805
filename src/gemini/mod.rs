// Gemini API client module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::GeminiClient;

use crate::error::InferenceError;
use crate::models::gemini::GenerateContentRequest;
use std::future::Future;

/// A model service that answers one packaged request with text.
///
/// [`GeminiClient`] is the production implementation; the session only
/// depends on this seam.
pub trait InferenceBackend {
    /// Single attempt, no retries. Returns the answer text verbatim.
    fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> impl Future<Output = Result<String, InferenceError>> + Send;
}
