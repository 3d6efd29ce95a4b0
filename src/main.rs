//! Strictly 2048 - command line entry point

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_2048_app::{
    AppConfig, Cli, Command, FileHighScore, HighScoreStore, PlayArgs, ScoreFileArgs, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(args) => play(args),
        Command::HighScore(args) => show_high_score(args),
        Command::ResetHighScore(args) => reset_high_score(args),
    }
}

/// Start an interactive game
fn play(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(args.overrides())?;
    run_tui(config)
}

/// Logging for the commands that don't take over the terminal
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print the stored high score
#[instrument(skip_all)]
fn show_high_score(args: ScoreFileArgs) -> Result<()> {
    init_stderr_logging();
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(args.overrides())?;
    let store = FileHighScore::new(config.high_score_file().clone());
    let score = store.load()?;
    info!(path = %store.path().display(), score, "High score read");
    println!("{}", score);
    Ok(())
}

/// Delete the stored high score
#[instrument(skip_all)]
fn reset_high_score(args: ScoreFileArgs) -> Result<()> {
    init_stderr_logging();
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(args.overrides())?;
    let store = FileHighScore::new(config.high_score_file().clone());
    store.clear()?;
    info!(path = %store.path().display(), "High score reset");
    println!("High score reset");
    Ok(())
}
