//! Tests for the session driver and its high-score bookkeeping.

use rand::{SeedableRng, rngs::StdRng};
use strictly_2048_app::{
    AnyGame, Board, Direction, GameSession, GameSetup, MemoryHighScore, Phase, SessionEvent,
};

fn session(rows: &[[u32; 4]; 4], best: u64) -> GameSession<MemoryHighScore, StdRng> {
    let board = Board::from_rows(rows).expect("valid board");
    let game: AnyGame = GameSetup::resume(board).into();
    GameSession::with_game(game, MemoryHighScore::with_score(best), StdRng::seed_from_u64(17))
}

#[test]
fn test_high_score_saved_when_beaten() {
    let mut session = session(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0);

    let event = session.handle(Direction::Left).expect("legal move");
    assert!(matches!(event, SessionEvent::Moved(_)));
    assert_eq!(session.score(), 4);
    assert_eq!(session.high_score(), 4);
    assert_eq!(session.store().get(), 4);
}

#[test]
fn test_high_score_kept_when_not_beaten() {
    let mut session = session(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 100);

    session.handle(Direction::Left).expect("legal move");
    assert_eq!(session.score(), 4);
    assert_eq!(session.high_score(), 100);
    assert_eq!(session.store().get(), 100);
}

#[test]
fn test_unchanged_direction() {
    let mut session = session(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0);
    let before = session.board().clone();

    let event = session.handle(Direction::Up).expect("legal move");
    assert_eq!(event, SessionEvent::Unchanged(Direction::Up));
    assert_eq!(session.board(), &before);
}

#[test]
fn test_input_ignored_after_game_over() {
    let mut session = session(
        &[[2, 4, 2, 4], [4, 2, 4, 2], [8, 4, 2, 4], [16, 32, 16, 0]],
        0,
    );

    let event = session.handle(Direction::Right).expect("legal move");
    assert!(matches!(event, SessionEvent::GameOver { .. }));
    assert_eq!(session.phase(), Phase::GameOver);

    let board = session.board().clone();
    assert_eq!(session.handle(Direction::Left).expect("ignored"), SessionEvent::Ignored);
    assert_eq!(session.board(), &board);
}

#[test]
fn test_restart_returns_to_playing() {
    let mut session = session(
        &[[2, 4, 2, 4], [4, 2, 4, 2], [8, 4, 2, 4], [16, 32, 16, 0]],
        0,
    );
    session.handle(Direction::Right).expect("legal move");
    session.restart();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.board().tile_count(), 2);
}
