//! High-score persistence.
//!
//! The engine never touches the high score. The session driver loads it at
//! startup and saves it whenever the current score beats it.

mod error;
mod store;

pub use error::HighScoreError;
pub use store::{FileHighScore, HighScoreStore, MemoryHighScore};
