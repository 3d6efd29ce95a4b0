//! Phase-specific typestate structs for 2048.
//!
//! Each phase is its own type. Only [`GameInProgress`] can accept moves,
//! and a [`GameFinished`] always carries its [`Outcome`].

use super::action::{MoveError, Turn, TurnReport};
use super::contracts::{Contract, MoveContract};
use super::phases::Outcome;
use super::rules::{apply_move, is_terminal};
use super::spawn::spawn_tile;
use super::{Board, BoardError, Direction, Spawn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: an empty board waiting for its opening tiles.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a setup with an empty board of the given dimension.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
        })
    }

    /// Setup for a dimension already known to be valid.
    pub(crate) fn blank(size: usize) -> Self {
        Self {
            board: Board::blank(size),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Resumes play on an existing board.
    ///
    /// The board's tiles are recorded as the opening. A board with no legal
    /// move comes back already finished.
    #[instrument(skip_all, fields(size = board.size()))]
    pub fn resume(board: Board) -> GameResult {
        let opening: Vec<Spawn> = board
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0)
            .map(|(idx, &value)| Spawn {
                row: idx / board.size(),
                col: idx % board.size(),
                value,
            })
            .collect();

        if is_terminal(&board) {
            let outcome = Outcome {
                score: 0,
                highest_tile: board.highest_tile(),
                turns: 0,
            };
            debug!(%outcome, "Resumed board has no moves");
            return GameResult::Finished(GameFinished {
                board,
                opening,
                history: Vec::new(),
                outcome,
            });
        }

        GameResult::InProgress(GameInProgress {
            board,
            score: 0,
            opening,
            history: Vec::new(),
        })
    }

    /// Spawns the two opening tiles and starts play.
    #[instrument(skip_all, fields(size = self.board.size()))]
    pub fn start<R: Rng + ?Sized>(self, rng: &mut R) -> GameInProgress {
        let mut board = self.board;
        let mut opening = Vec::with_capacity(2);
        for _ in 0..2 {
            let (next, spawn) = spawn_tile(&board, rng);
            board = next;
            opening.extend(spawn);
        }
        info!(tiles = opening.len(), "Game started");
        GameInProgress {
            board,
            score: 0,
            opening,
            history: Vec::new(),
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::blank(super::DEFAULT_SIZE)
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: the board is never terminal here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(super) board: Board,
    pub(super) score: u64,
    pub(super) opening: Vec<Spawn>,
    pub(super) history: Vec<Turn>,
}

impl GameInProgress {
    /// Plays `direction`, consuming self and returning the next phase.
    ///
    /// A direction that changes nothing leaves the game as it was, with no
    /// spawn and no history entry. Otherwise a tile is spawned and the game
    /// finishes if the resulting board is terminal.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self, rng), fields(score = self.score))]
    pub fn make_move<R: Rng + ?Sized>(
        self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<(GameResult, TurnReport), MoveError> {
        MoveContract::pre(&self, &direction)?;

        let slid = apply_move(&self.board, direction);
        if !slid.moved {
            debug!("Move left the board unchanged");
            let report = TurnReport {
                direction,
                before: self.board.clone(),
                moved: false,
                score_delta: 0,
                spawn: None,
            };
            return Ok((GameResult::InProgress(self), report));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let (board, spawn) = spawn_tile(&slid.board, rng);
        let mut game = self;
        let report = TurnReport {
            direction,
            before: std::mem::replace(&mut game.board, board),
            moved: true,
            score_delta: slid.score_delta,
            spawn,
        };
        game.score += slid.score_delta;
        game.history.push(Turn {
            direction,
            score_delta: slid.score_delta,
            spawn,
        });

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        if is_terminal(&game.board) {
            let outcome = Outcome {
                score: game.score,
                highest_tile: game.board.highest_tile(),
                turns: game.history.len(),
            };
            info!(%outcome, "Game over");
            return Ok((
                GameResult::Finished(GameFinished {
                    board: game.board,
                    opening: game.opening,
                    history: game.history,
                    outcome,
                }),
                report,
            ));
        }

        Ok((GameResult::InProgress(game), report))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Tiles spawned when the game started.
    pub fn opening(&self) -> &[Spawn] {
        &self.opening
    }

    /// Turns played so far.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Directions that would change the board.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| apply_move(&self.board, direction).moved)
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: the board is terminal and the outcome is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    opening: Vec<Spawn>,
    history: Vec<Turn>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the final score.
    pub fn score(&self) -> u64 {
        self.outcome.score
    }

    /// Tiles spawned when the game started.
    pub fn opening(&self) -> &[Spawn] {
        &self.opening
    }

    /// Turns played.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Restarts on an empty board of the same size.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::blank(self.board.size())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn in_progress(rows: &[[u32; 4]; 4]) -> GameInProgress {
        match GameSetup::resume(Board::from_rows(rows).expect("valid board")) {
            GameResult::InProgress(game) => game,
            GameResult::Finished(_) => panic!("Board should have moves"),
        }
    }

    #[test]
    fn test_start_spawns_two_tiles() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = GameSetup::default().start(&mut rng);
        assert_eq!(game.board().tile_count(), 2);
        assert_eq!(game.opening().len(), 2);
        assert!(game.board().cells().iter().all(|&v| matches!(v, 0 | 2 | 4)));
    }

    #[test]
    fn test_unchanged_move_keeps_game() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = in_progress(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let (result, report) = game.clone().make_move(Direction::Left, &mut rng).expect("legal");
        assert!(!report.moved);
        match result {
            GameResult::InProgress(after) => assert_eq!(after, game),
            GameResult::Finished(_) => panic!("Game shouldn't finish"),
        }
    }

    #[test]
    fn test_move_scores_and_spawns() {
        let mut rng = StdRng::seed_from_u64(3);
        let game = in_progress(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let (result, report) = game.make_move(Direction::Left, &mut rng).expect("legal");
        assert!(report.moved);
        assert_eq!(report.score_delta, 4);
        let spawn = report.spawn.expect("room to spawn");
        match result {
            GameResult::InProgress(after) => {
                assert_eq!(after.score(), 4);
                assert_eq!(after.history().len(), 1);
                assert_eq!(after.board().get(0, 0), Some(4));
                assert_eq!(after.board().get(spawn.row, spawn.col), Some(spawn.value));
                assert_eq!(after.board().tile_count(), 2);
            }
            GameResult::Finished(_) => panic!("Game shouldn't finish"),
        }
    }

    #[test]
    fn test_valid_moves_excludes_blocked_directions() {
        let game = in_progress(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(game.valid_moves(), vec![Direction::Right, Direction::Down]);
    }

    #[test]
    fn test_resume_terminal_board_is_finished() {
        let board = Board::from_rows(&[[2, 4], [4, 2]]).expect("valid board");
        match GameSetup::resume(board) {
            GameResult::Finished(game) => {
                assert_eq!(game.outcome().highest_tile, 4);
                assert_eq!(game.opening().len(), 4);
            }
            GameResult::InProgress(_) => panic!("Board has no moves"),
        }
    }

    #[test]
    fn test_restart_keeps_size() {
        let finished = GameFinished {
            board: Board::from_rows(&[[2, 4], [4, 2]]).expect("valid board"),
            opening: Vec::new(),
            history: Vec::new(),
            outcome: Outcome {
                score: 0,
                highest_tile: 4,
                turns: 0,
            },
        };
        let setup = finished.restart();
        assert_eq!(setup.board().size(), 2);
        assert_eq!(setup.board().tile_count(), 0);
    }
}
