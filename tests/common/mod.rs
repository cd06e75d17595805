// Test doubles for the inference seam
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use animal_lens::error::InferenceError;
use animal_lens::gemini::InferenceBackend;
use animal_lens::models::gemini::GenerateContentRequest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Ten bytes starting with the PNG signature.
pub const DUMMY_PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0";

pub enum Reply {
    Text(String),
    Api { status: u16, message: String },
    Malformed,
}

/// Records every request it receives and answers with a canned reply.
pub struct RecordingBackend {
    reply: Reply,
    calls: Mutex<Vec<GenerateContentRequest>>,
}

impl RecordingBackend {
    pub fn answering(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GenerateContentRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl InferenceBackend for RecordingBackend {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, InferenceError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Api { status, message } => Err(InferenceError::Api {
                status: *status,
                message: message.clone(),
            }),
            Reply::Malformed => {
                let cause = serde_json::from_str::<serde_json::Value>("{\"candidates\":").unwrap_err();
                Err(InferenceError::Parse(cause))
            }
        }
    }
}

/// Holds every call until the gate is opened.
#[derive(Default)]
pub struct GatedBackend {
    pub gate: Notify,
    pub calls: AtomicUsize,
}

impl InferenceBackend for GatedBackend {
    async fn generate_content(
        &self,
        _request: &GenerateContentRequest,
    ) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok("done".to_string())
    }
}
