//! Session driver: owns the game, the random source and the high score.

use crate::high_score::HighScoreStore;
use rand::Rng;
use strictly_2048::{
    AnyGame, Board, BoardError, Direction, GameSetup, MoveError, Outcome, Phase, TurnReport,
};
use tracing::{debug, error, info, instrument, warn};

/// What a key press did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The board changed; play continues.
    Moved(TurnReport),
    /// The direction changed nothing.
    Unchanged(Direction),
    /// The board changed and no move is left.
    GameOver {
        /// The final turn.
        report: TurnReport,
        /// Final result.
        outcome: Outcome,
    },
    /// Input arrived after the game ended.
    Ignored,
}

/// A single-player 2048 session.
///
/// The session is the only place the high score is read or written:
/// the engine and renderer never see the store.
#[derive(Debug)]
pub struct GameSession<S, R> {
    game: AnyGame,
    store: S,
    rng: R,
    high_score: u64,
}

impl<S: HighScoreStore, R: Rng> GameSession<S, R> {
    /// Starts a session on a fresh `size`×`size` board.
    ///
    /// An unreadable high score is logged and treated as 0.
    #[instrument(skip(store, rng))]
    pub fn new(size: usize, store: S, mut rng: R) -> Result<Self, BoardError> {
        let setup = GameSetup::new(size)?;
        let game = AnyGame::start(setup, &mut rng);
        Ok(Self::with_game(game, store, rng))
    }

    /// Wraps a game already underway.
    #[instrument(skip_all, fields(size = game.board().size(), phase = %game.phase()))]
    pub fn with_game(game: AnyGame, store: S, rng: R) -> Self {
        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "Could not read high score, starting from 0");
                0
            }
        };
        info!(high_score, "Session started");
        Self {
            game,
            store,
            rng,
            high_score,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the current score.
    pub fn score(&self) -> u64 {
        self.game.score()
    }

    /// Best score across sessions, including this one.
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// Returns the high-score store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Plays one direction.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] if the engine detects a
    /// broken postcondition. A finished game yields [`SessionEvent::Ignored`].
    #[instrument(skip(self), fields(score = self.score(), phase = %self.phase()))]
    pub fn handle(&mut self, direction: Direction) -> Result<SessionEvent, MoveError> {
        if self.game.is_over() {
            debug!("Ignoring input after game over");
            return Ok(SessionEvent::Ignored);
        }

        let (next, report) = match self.game.clone().make_move(direction, &mut self.rng) {
            Ok(step) => step,
            Err(MoveError::GameOver) => return Ok(SessionEvent::Ignored),
            Err(e) => {
                error!(error = %e, "Engine rejected move");
                return Err(e);
            }
        };
        self.game = next;

        if !report.moved {
            return Ok(SessionEvent::Unchanged(direction));
        }

        self.record_score();

        match self.game.outcome() {
            Some(outcome) => {
                info!(%outcome, "Game over");
                Ok(SessionEvent::GameOver {
                    report,
                    outcome: *outcome,
                })
            }
            None => Ok(SessionEvent::Moved(report)),
        }
    }

    /// Starts a new game on a board of the same size, keeping the high score.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game = self.game.restart(&mut self.rng);
        info!(size = self.board().size(), "Session restarted");
    }

    /// Persists the score if it beats the best one seen.
    fn record_score(&mut self) {
        let score = self.score();
        if score <= self.high_score {
            return;
        }
        self.high_score = score;
        if let Err(e) = self.store.save(score) {
            warn!(error = %e, score, "Could not save high score");
        } else {
            debug!(score, "New high score saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_score::MemoryHighScore;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_session_has_two_tiles() {
        let session = GameSession::new(4, MemoryHighScore::default(), StdRng::seed_from_u64(1))
            .expect("valid size");
        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.high_score(), 0);
    }

    #[test]
    fn test_bad_size_rejected() {
        let result = GameSession::new(1, MemoryHighScore::default(), StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(BoardError::TooSmall { size: 1 })));
    }

    #[test]
    fn test_with_game_keeps_board() {
        let board = Board::from_rows(&[[2, 2], [0, 0]]).expect("valid board");
        let game: AnyGame = GameSetup::resume(board.clone()).into();
        let session =
            GameSession::with_game(game, MemoryHighScore::default(), StdRng::seed_from_u64(1));
        assert_eq!(session.board(), &board);
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut session =
            GameSession::new(4, MemoryHighScore::with_score(512), StdRng::seed_from_u64(1))
                .expect("valid size");
        session.restart();
        assert_eq!(session.high_score(), 512);
        assert_eq!(session.score(), 0);
        assert_eq!(session.board().tile_count(), 2);
    }
}
