// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use crate::error::ValidationError;
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Heic,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Heic => "image/heic",
        }
    }

    /// Try to detect format from MIME type
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::WebP),
            "image/gif" => Some(ImageFormat::Gif),
            "image/heic" => Some(ImageFormat::Heic),
            _ => None,
        }
    }

    /// Detect format from magic bytes at start of image data
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"\xFF\xD8\xFF") {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if data.len() >= 12 && data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
            Some(ImageFormat::WebP)
        } else if data.len() >= 12 && (data[4..12] == *b"ftypheic" || data[4..12] == *b"ftypheix") {
            Some(ImageFormat::Heic)
        } else {
            None
        }
    }
}

/// Gemini caps the whole inline request at 20MB
pub const MAX_INLINE_PAYLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Size of `raw_len` bytes after standard padded base64 encoding.
pub fn base64_len(raw_len: usize) -> usize {
    raw_len.div_ceil(3) * 4
}

/// Validate image data size against the inline limit, as it will be sent
pub fn validate_image_size(data_len: usize) -> Result<(), ValidationError> {
    let encoded = base64_len(data_len);
    if encoded > MAX_INLINE_PAYLOAD_BYTES {
        return Err(ValidationError::TooLarge {
            size: encoded,
            max: MAX_INLINE_PAYLOAD_BYTES,
        });
    }
    Ok(())
}

/// Resolve the MIME type of an upload.
///
/// Order: explicit override, file extension, magic bytes. Returns `None`
/// when nothing identifies the data as an image.
pub fn resolve_mime_type(explicit: Option<&str>, path: Option<&Path>, data: &[u8]) -> Option<String> {
    if let Some(mime) = explicit {
        return Some(mime.trim().to_lowercase());
    }

    let guessed = path
        .and_then(|p| mime_guess::from_path(p).first())
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .map(|m| m.essence_str().to_string());

    guessed.or_else(|| ImageFormat::sniff(data).map(|f| f.mime_type().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0";

    #[test]
    fn test_jpg_alias() {
        assert_eq!(ImageFormat::from_mime_type("image/jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime_type("IMAGE/PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_mime_type("image/bmp"), None);
    }

    #[test]
    fn test_sniff_short_buffers() {
        assert_eq!(ImageFormat::sniff(PNG_MAGIC), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(b"\xFF\xD8\xFF"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"RIFF"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let mime = resolve_mime_type(Some(" Image/PNG "), Some(Path::new("cat.jpg")), b"");
        assert_eq!(mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_resolve_from_extension() {
        let mime = resolve_mime_type(None, Some(Path::new("cat.JPEG")), PNG_MAGIC);
        assert_eq!(mime.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_resolve_falls_back_to_magic_bytes() {
        let mime = resolve_mime_type(None, Some(Path::new("upload.bin")), PNG_MAGIC);
        assert_eq!(mime.as_deref(), Some("image/png"));
        assert_eq!(resolve_mime_type(None, None, b"plain text"), None);
    }

    #[test]
    fn test_size_limit() {
        // Largest raw size whose encoding still fits
        let max_raw = MAX_INLINE_PAYLOAD_BYTES / 4 * 3;
        assert!(validate_image_size(max_raw).is_ok());
        assert_eq!(
            validate_image_size(max_raw + 1),
            Err(ValidationError::TooLarge {
                size: MAX_INLINE_PAYLOAD_BYTES + 4,
                max: MAX_INLINE_PAYLOAD_BYTES,
            })
        );
    }

    #[test]
    fn test_raw_size_under_limit_can_still_be_too_large() {
        // 16MB raw is ~21.3MB encoded
        let raw = 16 * 1024 * 1024;
        assert!(raw < MAX_INLINE_PAYLOAD_BYTES);
        assert!(matches!(
            validate_image_size(raw),
            Err(ValidationError::TooLarge { size, .. }) if size == base64_len(raw)
        ));
    }

    #[test]
    fn test_base64_len_matches_encoder() {
        use base64::Engine;
        for len in [0, 1, 2, 3, 10, 1000] {
            let encoded = base64::engine::general_purpose::STANDARD.encode(vec![0u8; len]);
            assert_eq!(base64_len(len), encoded.len());
        }
    }
}
