//! High-score stores.

use super::HighScoreError;
use derive_new::new;
use std::cell::Cell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Somewhere a high score survives between sessions.
pub trait HighScoreStore {
    /// Reads the stored high score. A store with nothing in it reports 0.
    ///
    /// # Errors
    ///
    /// Returns [`HighScoreError`] if the stored value cannot be read or parsed.
    fn load(&self) -> Result<u64, HighScoreError>;

    /// Replaces the stored high score.
    ///
    /// # Errors
    ///
    /// Returns [`HighScoreError`] if the value cannot be written.
    fn save(&self, score: u64) -> Result<(), HighScoreError>;
}

/// High score kept in a text file as a single decimal integer.
#[derive(Debug, Clone, new)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the backing file, if present.
    ///
    /// # Errors
    ///
    /// Returns [`HighScoreError`] if the file exists but cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), HighScoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("High score cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HighScoreStore for FileHighScore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<u64, HighScoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No high score file, starting from 0");
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };

        let score = content.trim().parse::<u64>()?;
        debug!(score, "High score loaded");
        Ok(score)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(&self, score: u64) -> Result<(), HighScoreError> {
        std::fs::write(&self.path, score.to_string()).map_err(|e| {
            HighScoreError::new(format!(
                "Failed to write '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(score, "High score saved");
        Ok(())
    }
}

/// In-memory high score, for tests and sessions that should not persist.
#[derive(Debug, Default)]
pub struct MemoryHighScore {
    score: Cell<u64>,
}

impl MemoryHighScore {
    /// Creates a store holding `score`.
    pub fn with_score(score: u64) -> Self {
        Self {
            score: Cell::new(score),
        }
    }

    /// Current stored value.
    pub fn get(&self) -> u64 {
        self.score.get()
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> Result<u64, HighScoreError> {
        Ok(self.score.get())
    }

    fn save(&self, score: u64) -> Result<(), HighScoreError> {
        self.score.set(score);
        Ok(())
    }
}
