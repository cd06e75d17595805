// Interactive prompt loop
// Author: kelexine (https://github.com/kelexine)

use super::submit_once;
use crate::error::Result;
use crate::gemini::InferenceBackend;
use crate::input::STDIN_PATH;
use crate::session::Session;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const QUIT_COMMANDS: [&str; 3] = [":quit", ":q", ":exit"];

pub const STDIN_UNAVAILABLE: &str =
    "reading the image from stdin (-) only works with --image - outside interactive mode";

/// Run submissions until `:quit` or end of input.
///
/// The last entered image path and question are kept; pressing Enter on an
/// empty line reuses them. Every outcome is rendered and the loop carries on.
pub async fn run_interactive<B, R, W>(
    session: &Session<B>,
    input: R,
    out: &mut W,
    mime_override: Option<&str>,
) -> Result<()>
where
    B: InferenceBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut last_image: Option<String> = None;
    let mut last_question: Option<String> = None;

    writeln!(
        out,
        "Enter an image path and a question. Empty input reuses the previous value, :quit exits."
    )?;

    loop {
        prompt(out, "Image path", last_image.as_deref())?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let image = clean_path(&line);
        if is_quit(image) {
            break;
        }
        // stdin already carries this prompt loop
        if image == STDIN_PATH {
            writeln!(out, "Warning: {}", STDIN_UNAVAILABLE)?;
            continue;
        }
        if !image.is_empty() {
            last_image = Some(image.to_string());
        }

        prompt(out, "Question", last_question.as_deref())?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let question = line.trim();
        if is_quit(question) {
            break;
        }
        if !question.is_empty() {
            last_question = Some(question.to_string());
        }

        let outcome = submit_once(
            session,
            last_image.as_deref().map(Path::new),
            mime_override,
            last_question.as_deref().unwrap_or(""),
            out,
        )
        .await;

        if let Err(e) = outcome {
            debug!("Submission did not produce an answer: {}", e);
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W, label: &str, last: Option<&str>) -> std::io::Result<()> {
    match last {
        Some(value) => write!(out, "{} [{}]: ", label, value)?,
        None => write!(out, "{}: ", label)?,
    }
    out.flush()
}

/// Trim whitespace and the quotes terminals add to dragged-in paths.
fn clean_path(line: &str) -> &str {
    line.trim().trim_matches(|c| c == '"' || c == '\'')
}

fn is_quit(line: &str) -> bool {
    QUIT_COMMANDS.contains(&line)
}
