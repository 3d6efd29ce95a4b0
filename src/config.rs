//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::tui::Theme;
use strictly_2048::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use tracing::{debug, info, instrument};

/// Default location of the optional config file.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_2048.toml";

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board dimension N.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// File holding the high score.
    #[serde(default = "default_high_score_file")]
    high_score_file: PathBuf,

    /// File receiving log output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Milliseconds between animation frames.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Frames a move highlight stays on screen.
    #[serde(default = "default_animation_frames")]
    animation_frames: u8,

    /// Fixed seed for the tile spawner. Unset means a fresh random game.
    #[serde(default)]
    seed: Option<u64>,

    /// Colour scheme at startup.
    #[serde(default)]
    theme: Theme,
}

fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn default_high_score_file() -> PathBuf {
    PathBuf::from("high_score.txt")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_2048.log")
}

fn default_tick_ms() -> u64 {
    50
}

fn default_animation_frames() -> u8 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            high_score_file: default_high_score_file(),
            log_file: default_log_file(),
            tick_ms: default_tick_ms(),
            animation_frames: default_animation_frames(),
            seed: None,
            theme: Theme::default(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Board dimension.
    pub board_size: Option<usize>,
    /// High score file.
    pub high_score_file: Option<PathBuf>,
    /// Spawner seed.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(size) = overrides.board_size {
            self.board_size = size;
        }
        if let Some(path) = overrides.high_score_file {
            self.high_score_file = path;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks values the engine or renderer cannot work with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at least {}, got {}",
                MIN_SIZE, self.board_size
            )));
        }
        if self.board_size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {}, got {}",
                MAX_SIZE, self.board_size
            )));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
