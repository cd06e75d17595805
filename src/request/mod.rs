// Request building (PromptRequest → Gemini)
// Author: kelexine (https://github.com/kelexine)

use crate::input::PromptRequest;
use crate::models::gemini::{Content, GenerateContentRequest, InlineData, Part};
use base64::Engine;
use tracing::debug;

/// Text segment: system instruction, a blank line, then the question.
pub fn prompt_text(prompt: &PromptRequest) -> String {
    format!(
        "{}\n\nQuestion: {}",
        prompt.system_instruction.trim(),
        prompt.question
    )
}

/// Package a validated prompt into one user turn with a text part and an
/// inline image part.
pub fn build_request(prompt: &PromptRequest) -> GenerateContentRequest {
    let text = prompt_text(prompt);

    // Gemini expects base64 data as-is (no prefix like "data:image/png;base64,")
    let data = base64::engine::general_purpose::STANDARD.encode(prompt.image.bytes());

    debug!(
        "Built request: {} chars of text, {} image bytes ({})",
        text.len(),
        prompt.image.bytes().len(),
        prompt.image.mime_type()
    );

    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![
                Part::Text { text },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: prompt.image.mime_type().to_string(),
                        data,
                    },
                },
            ],
        }],
    }
}
