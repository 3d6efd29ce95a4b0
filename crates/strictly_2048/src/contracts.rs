//! Contract-based validation for 2048 moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, Twenty48Invariants};
use super::rules::is_terminal;
use super::typestate::GameInProgress;
use super::Direction;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board still has a move left.
pub struct BoardNotTerminal;

impl BoardNotTerminal {
    /// Fails with [`MoveError::GameOver`] on a terminal board.
    #[instrument(skip(game))]
    pub fn check(game: &GameInProgress) -> Result<(), MoveError> {
        if is_terminal(game.board()) {
            warn!("Move attempted on a terminal board");
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: score never decreases across a move.
pub struct ScoreMonotonic;

impl ScoreMonotonic {
    /// Returns true if `after` scored at least as much as `before`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameInProgress, after: &GameInProgress) -> bool {
        let valid = after.score() >= before.score();
        if !valid {
            warn!(before = before.score(), after = after.score(), "Score decreased");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for directional moves.
///
/// Preconditions:
/// - Board is not terminal
///
/// Postconditions:
/// - Score is monotonic
/// - Tiles are powers of two
/// - Tile sum is conserved
/// - Score matches history
pub struct MoveContract;

impl Contract<GameInProgress, Direction> for MoveContract {
    fn pre(game: &GameInProgress, _direction: &Direction) -> Result<(), MoveError> {
        BoardNotTerminal::check(game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if !ScoreMonotonic::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: score decreased".to_string(),
            ));
        }
        Twenty48Invariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
