//! Session phases and the outcome of a finished game.

use serde::{Deserialize, Serialize};

/// Phase of a 2048 session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Moves are accepted.
    Playing,
    /// No move can change the board; input is ignored.
    #[strum(to_string = "Game Over")]
    GameOver,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Final score.
    pub score: u64,
    /// Largest tile reached.
    pub highest_tile: u32,
    /// Number of turns that changed the board.
    pub turns: usize,
}

impl Outcome {
    /// Returns true if the classic 2048 tile was reached.
    pub fn reached_2048(&self) -> bool {
        self.highest_tile >= 2048
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scored {} in {} turns (best tile {})",
            self.score, self.turns, self.highest_tile
        )
    }
}
