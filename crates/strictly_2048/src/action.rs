//! Turn records and move errors.
//!
//! A turn is a domain event: the direction the player chose, what it
//! scored and the tile that appeared afterwards. Turns are kept in the
//! game history so the invariants can audit score and tile mass.

use super::{Board, Direction, Spawn};
use serde::{Deserialize, Serialize};

/// One accepted move that changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Direction played.
    pub direction: Direction,
    /// Points earned by merges.
    pub score_delta: u64,
    /// Tile spawned after the slide, if there was room.
    pub spawn: Option<Spawn>,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (+{})", self.direction, self.score_delta)
    }
}

/// What happened when a direction was played, for callers that render or
/// log the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Direction played.
    pub direction: Direction,
    /// Board before the move.
    pub before: Board,
    /// True if the slide changed the board.
    pub moved: bool,
    /// Points earned by merges.
    pub score_delta: u64,
    /// Tile spawned after the slide.
    pub spawn: Option<Spawn>,
}

impl TurnReport {
    /// Cells whose value differs between `before` and `after`.
    pub fn changed_cells(&self, after: &Board) -> Vec<(usize, usize)> {
        let n = after.size();
        self.before
            .cells()
            .iter()
            .zip(after.cells())
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(idx, _)| (idx / n, idx % n))
            .collect()
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
