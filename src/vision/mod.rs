//! Image handling for uploads.
//!
//! This module covers MIME type detection, image validation limits and the
//! terminal preview shown for an upload.
//!
//! # Submodules
//!
//! - `models`: Supported formats, size limits and MIME resolution.
//! - `preview`: Summary of an uploaded image derived from its captured bytes.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;
pub mod preview;

pub use models::{resolve_mime_type, ImageFormat};
pub use preview::ImagePreview;
