// Single-read capture of an uploaded image
// Author: kelexine (https://github.com/kelexine)

use crate::error::Result;
use crate::vision::{resolve_mime_type, ImagePreview};
use std::io::Read;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Upload path that means "read the image from stdin".
pub const STDIN_PATH: &str = "-";

/// Fallback MIME type when nothing identifies the upload.
const UNKNOWN_MIME: &str = "application/octet-stream";

/// Bytes captured from an upload source, read exactly once.
#[derive(Debug, Clone)]
pub struct Upload {
    name: String,
    bytes: Vec<u8>,
    mime_type: Option<String>,
}

impl Upload {
    /// Read a file, or stdin when `path` is `-`.
    pub async fn open(path: &Path, mime_override: Option<&str>) -> Result<Self> {
        if path == Path::new(STDIN_PATH) {
            let mut bytes = Vec::new();
            tokio::io::stdin().read_to_end(&mut bytes).await?;
            return Ok(Self::captured("stdin", None, bytes, mime_override));
        }

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::captured(&name, Some(path), bytes, mime_override))
    }

    /// Drain a single-read source into an owned buffer.
    pub fn from_reader<R: Read>(name: &str, mut reader: R, mime_override: Option<&str>) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::captured(name, Some(Path::new(name)), bytes, mime_override))
    }

    fn captured(name: &str, path: Option<&Path>, bytes: Vec<u8>, mime_override: Option<&str>) -> Self {
        let mime_type = resolve_mime_type(mime_override, path, &bytes);
        debug!("Captured {} bytes from {}", bytes.len(), name);
        Self {
            name: name.to_string(),
            bytes,
            mime_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(UNKNOWN_MIME)
    }

    pub fn preview(&self) -> ImagePreview {
        ImagePreview::from_bytes(&self.name, self.mime_type.as_deref(), &self.bytes)
    }

    /// Hand the captured buffer over for request construction.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        let mime = self.mime_type().to_string();
        (self.bytes, mime)
    }
}
