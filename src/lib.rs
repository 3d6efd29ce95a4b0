//! Strictly 2048 - a terminal 2048 built on a pure engine
//!
//! The [`strictly_2048`] crate owns the rules. This crate wraps them in a
//! playable program: a session driver that keeps the high score, a ratatui
//! front end, configuration and a command line.
//!
//! # Architecture
//!
//! - **Engine**: board, moves, spawns and phases (re-exported below)
//! - **Session**: one game plus its random source and high-score store
//! - **High score**: a trait with file and in-memory stores
//! - **TUI**: input mapping, palette, animation and rendering
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use strictly_2048_app::{Direction, GameSession, MemoryHighScore, SessionEvent};
//!
//! let mut session = GameSession::new(4, MemoryHighScore::default(), StdRng::seed_from_u64(7))
//!     .expect("valid size");
//! match session.handle(Direction::Left).expect("engine invariants hold") {
//!     SessionEvent::Moved(report) => assert!(report.moved),
//!     SessionEvent::Unchanged(_) => assert_eq!(session.score(), 0),
//!     other => println!("{:?}", other),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod high_score;
mod session;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, PlayArgs, ScoreFileArgs};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ConfigOverrides, DEFAULT_CONFIG_FILE};

// Crate-level exports - High score persistence
pub use high_score::{FileHighScore, HighScoreError, HighScoreStore, MemoryHighScore};

// Crate-level exports - Session management
pub use session::{GameSession, SessionEvent};

// Crate-level exports - Terminal UI
pub use tui::{Action, Animation, App, CellEffect, Theme, action_for, run_tui};

// Crate-level exports - Game types
pub use strictly_2048::{
    AnyGame, Board, BoardError, DEFAULT_SIZE, Direction, GameFinished, GameInProgress,
    GameResult, GameSetup, MAX_SIZE, MAX_TILE, MIN_SIZE, MoveError, MoveResult, Outcome, Phase,
    Spawn, Turn, TurnReport, apply_move, has_empty_cell, is_terminal, spawn_tile,
};
