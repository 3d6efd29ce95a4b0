//! Pure 2048 game logic.
//!
//! The engine owns an N×N grid of tiles and nothing else: no terminal, no
//! files, no clock. Callers inject the random source so games can be
//! replayed deterministically.
//!
//! # Architecture
//!
//! - **Rules**: slide, merge, rotate and terminal detection as pure functions
//! - **Spawn**: random 2/4 placement with an injected [`rand::Rng`]
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`
//! - **Invariants/Contracts**: checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use strictly_2048::{Direction, GameResult, GameSetup};
//!
//! let mut rng = StdRng::seed_from_u64(2048);
//! let game = GameSetup::new(4).expect("valid size").start(&mut rng);
//! assert_eq!(game.board().tile_count(), 2);
//!
//! let direction = game.valid_moves()[0];
//! match game.make_move(direction, &mut rng).expect("open board") {
//!     (GameResult::InProgress(game), report) => {
//!         assert!(report.moved && game.history().len() == 1)
//!     }
//!     (GameResult::Finished(game), _) => println!("{}", game.outcome()),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod kani_support;
mod phases;
pub mod rules;
mod spawn;
mod types;
mod typestate;
mod wrapper;

pub use action::{MoveError, Turn, TurnReport};
pub use contracts::{BoardNotTerminal, Contract, MoveContract, ScoreMonotonic};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, PowerOfTwoTilesInvariant,
    ScoreMatchesHistoryInvariant, TileSumConservedInvariant, Twenty48Invariants,
};
pub use phases::{Outcome, Phase};
pub use rules::{
    apply_move, has_empty_cell, is_terminal, rotate_clockwise, rotate_counter_clockwise,
    slide_left,
};
pub use spawn::{TWO_PROBABILITY, spawn_tile};
pub use types::{
    Board, BoardError, DEFAULT_SIZE, Direction, MAX_SIZE, MAX_TILE, MIN_SIZE, MoveResult, Spawn,
    can_merge, is_tile_value,
};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use wrapper::AnyGame;
