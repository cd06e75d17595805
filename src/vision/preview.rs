// Terminal preview of an uploaded image
// Author: kelexine (https://github.com/kelexine)

use image::ImageReader;
use std::fmt;
use std::io::Cursor;
use tracing::debug;

/// What the terminal shows in place of the uploaded picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub name: String,
    pub mime_type: Option<String>,
    pub byte_len: usize,
    /// `None` when the buffer could not be decoded (e.g. HEIC, truncated data).
    pub dimensions: Option<(u32, u32)>,
}

impl ImagePreview {
    /// Build a preview by borrowing the captured upload buffer.
    pub fn from_bytes(name: &str, mime_type: Option<&str>, data: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            mime_type: mime_type.map(str::to_string),
            byte_len: data.len(),
            dimensions: decode_dimensions(data),
        }
    }
}

fn decode_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format().ok()?;
    match reader.into_dimensions() {
        Ok(dims) => Some(dims),
        Err(e) => {
            debug!("Could not decode image dimensions: {}", e);
            None
        }
    }
}

impl fmt::Display for ImagePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} bytes",
            self.name,
            self.mime_type.as_deref().unwrap_or("unknown type"),
            self.byte_len
        )?;
        if let Some((w, h)) = self.dimensions {
            write!(f, ", {}x{}", w, h)?;
        }
        f.write_str(")")
    }
}
