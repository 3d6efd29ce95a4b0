//! High-score error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// High-score persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("High score error: {} at {}:{}", message, file, line)]
pub struct HighScoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HighScoreError {
    /// Creates a new high-score error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for HighScoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<std::num::ParseIntError> for HighScoreError {
    #[track_caller]
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(format!("Stored value is not a score: {}", err))
    }
}
