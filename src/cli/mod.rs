// CLI module for animal-lens
// Author: kelexine (https://github.com/kelexine)

mod interactive;

pub use interactive::{run_interactive, STDIN_UNAVAILABLE};

use crate::error::Result;
use crate::gemini::InferenceBackend;
use crate::input::Upload;
use crate::session::Session;
use crate::ui;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

/// animal-lens - Ask Gemini about the animal in a photo
#[derive(Parser, Debug)]
#[command(name = "animal-lens", version, about, long_about = None)]
pub struct Args {
    /// Image to analyze (jpg, jpeg, png, webp, gif, heic); `-` reads stdin
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Question about the image
    #[arg(short, long)]
    pub question: Option<String>,

    /// Override the detected MIME type of the image
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Gemini model identifier
    #[arg(long, env = "ANIMAL_LENS_MODEL")]
    pub model: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prompt for image and question repeatedly instead of a single shot
    #[arg(long)]
    pub interactive: bool,
}

impl Args {
    /// One-shot unless asked for the prompt loop or given nothing to submit.
    pub fn is_interactive(&self) -> bool {
        self.interactive || (self.image.is_none() && self.question.is_none())
    }
}

/// Capture the upload (if any) and run one submission, rendering to `out`.
///
/// Returns the outcome so the caller can pick an exit code.
pub async fn submit_once<B, W>(
    session: &Session<B>,
    image: Option<&Path>,
    mime_override: Option<&str>,
    question: &str,
    out: &mut W,
) -> Result<String>
where
    B: InferenceBackend,
    W: Write,
{
    let outcome = match capture(image, mime_override, out).await {
        Ok((bytes, mime_type)) => session.submit(bytes, &mime_type, question).await,
        Err(e) => Err(e),
    };
    ui::render_outcome(out, &outcome)?;
    outcome
}

/// Read the upload once and show its preview; the buffer then moves on to
/// request construction.
async fn capture<W: Write>(
    image: Option<&Path>,
    mime_override: Option<&str>,
    out: &mut W,
) -> Result<(Option<Vec<u8>>, String)> {
    let Some(path) = image else {
        return Ok((None, String::new()));
    };

    let upload = Upload::open(path, mime_override).await?;
    ui::render_preview(out, &upload.preview())?;
    let (bytes, mime_type) = upload.into_parts();
    Ok((Some(bytes), mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_args() {
        let args = Args::parse_from(["animal-lens", "-i", "cat.png", "-q", "What is this?"]);
        assert_eq!(args.image.as_deref(), Some(Path::new("cat.png")));
        assert_eq!(args.question.as_deref(), Some("What is this?"));
        assert!(!args.is_interactive());
    }

    #[test]
    fn test_no_inputs_means_interactive() {
        let args = Args::parse_from(["animal-lens"]);
        assert!(args.is_interactive());
    }

    #[test]
    fn test_question_only_is_still_one_shot() {
        let args = Args::parse_from(["animal-lens", "--question", "Which bird?"]);
        assert!(!args.is_interactive());
    }
}
