// animal-lens - Ask Gemini about the animal in a photo
// Author: kelexine (https://github.com/kelexine)

use animal_lens::cli::{self, Args};
use animal_lens::config::AppConfig;
use animal_lens::gemini::GeminiClient;
use animal_lens::session::Session;
use animal_lens::utils::logging;
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(model) = &args.model {
        config.gemini.model = model.clone();
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting animal-lens v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Fail fast on a missing credential, before any input is read
    config.require_api_key()?;
    let client = GeminiClient::new(&config.gemini)?;
    info!("Using Gemini model {}", client.model());
    let session = Session::new(client);

    let mut stdout = std::io::stdout();

    // Phase 4: Interactive loop or a single submission
    if args.is_interactive() {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        cli::run_interactive(&session, stdin, &mut stdout, args.mime_type.as_deref()).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = cli::submit_once(
        &session,
        args.image.as_deref(),
        args.mime_type.as_deref(),
        args.question.as_deref().unwrap_or(""),
        &mut stdout,
    )
    .await;

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    })
}
