//! Serializable game wrapper for typestate phases.

use super::action::{MoveError, Turn, TurnReport};
use super::phases::{Outcome, Phase};
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use super::{Board, Direction};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A game in any phase, for callers that hold one across loop iterations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in progress.
    InProgress(GameInProgress),
    /// Game over.
    Finished(GameFinished),
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// Starts a new game from a setup.
    #[instrument(skip_all)]
    pub fn start<R: Rng + ?Sized>(setup: GameSetup, rng: &mut R) -> Self {
        setup.start(rng).into()
    }

    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress(game) => game.board(),
            AnyGame::Finished(game) => game.board(),
        }
    }

    /// Returns the score for any game phase.
    pub fn score(&self) -> u64 {
        match self {
            AnyGame::InProgress(game) => game.score(),
            AnyGame::Finished(game) => game.score(),
        }
    }

    /// Returns the turn history for any game phase.
    pub fn history(&self) -> &[Turn] {
        match self {
            AnyGame::InProgress(game) => game.history(),
            AnyGame::Finished(game) => game.history(),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self {
            AnyGame::InProgress(_) => Phase::Playing,
            AnyGame::Finished(_) => Phase::GameOver,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }

    /// Returns the outcome if the game is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(game) => Some(game.outcome()),
        }
    }

    /// Plays a direction, returning the next game and what happened.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] for a finished game.
    #[instrument(skip(self, rng), fields(phase = %self.phase()))]
    pub fn make_move<R: Rng + ?Sized>(
        self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<(AnyGame, TurnReport), MoveError> {
        match self {
            AnyGame::InProgress(game) => {
                let (result, report) = game.make_move(direction, rng)?;
                debug!(moved = report.moved, delta = report.score_delta, "Move resolved");
                Ok((result.into(), report))
            }
            AnyGame::Finished(_) => {
                warn!("Move rejected: game is over");
                Err(MoveError::GameOver)
            }
        }
    }

    /// A new game on an empty board of the same size.
    #[instrument(skip_all)]
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        GameSetup::blank(self.board().size()).start(rng).into()
    }
}
