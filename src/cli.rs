//! Command-line interface for strictly_2048.

use crate::config::{ConfigOverrides, DEFAULT_CONFIG_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly 2048 - slide, merge, reach 2048
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Terminal 2048 with a persisted high score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Print the stored high score
    HighScore(ScoreFileArgs),

    /// Delete the stored high score
    ResetHighScore(ScoreFileArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for a play session.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Board dimension (N for an N×N grid)
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for the tile spawner, for repeatable games
    #[arg(long)]
    pub seed: Option<u64>,

    /// File holding the high score
    #[arg(long)]
    pub high_score_file: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            size: None,
            seed: None,
            high_score_file: None,
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl PlayArgs {
    /// Values that take precedence over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            board_size: self.size,
            high_score_file: self.high_score_file.clone(),
            seed: self.seed,
        }
    }
}

/// Options for commands that only touch the high score file.
#[derive(Args, Debug)]
pub struct ScoreFileArgs {
    /// File holding the high score
    #[arg(long)]
    pub high_score_file: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl ScoreFileArgs {
    /// Values that take precedence over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            high_score_file: self.high_score_file.clone(),
            ..Default::default()
        }
    }
}
