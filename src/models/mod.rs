//! Data models for the Gemini API.
//!
//! This module contains the request/response bodies of the upstream
//! `generateContent` call (`gemini`).

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;

pub use gemini::{Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part};
