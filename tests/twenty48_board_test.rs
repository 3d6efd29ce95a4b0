//! Tests for board mechanics: slides, rotations, spawns and terminal detection.

use rand::{Rng, SeedableRng, rngs::StdRng};
use strictly_2048::rules::{rotate_clockwise, rotate_counter_clockwise, slide_left};
use strictly_2048_app::{Board, Direction, apply_move, has_empty_cell, is_terminal, spawn_tile};

fn board(rows: &[[u32; 4]; 4]) -> Board {
    Board::from_rows(rows).expect("valid board")
}

#[test]
fn test_slide_examples() {
    assert_eq!(slide_left(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
    assert_eq!(slide_left(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
    assert_eq!(slide_left(&[4, 0, 4, 4]), (vec![8, 4, 0, 0], 8));
    assert_eq!(slide_left(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], 0));
    assert_eq!(slide_left(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
}

#[test]
fn test_four_rotations_are_identity() {
    let original = board(&[[2, 4, 8, 16], [32, 0, 0, 64], [0, 2, 0, 0], [128, 0, 4, 0]]);

    let mut rotated = original.clone();
    for _ in 0..4 {
        rotated = rotate_clockwise(&rotated);
    }
    assert_eq!(rotated, original);

    let mut rotated = original.clone();
    for _ in 0..4 {
        rotated = rotate_counter_clockwise(&rotated);
    }
    assert_eq!(rotated, original);
}

#[test]
fn test_left_on_packed_row_is_noop() {
    let start = board(&[[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);
    let result = apply_move(&start, Direction::Left);
    assert!(!result.moved);
    assert_eq!(result.score_delta, 0);
    assert_eq!(result.board, start);
}

#[test]
fn test_each_direction() {
    let start = board(&[[2, 0, 0, 2], [0; 4], [0, 4, 0, 0], [0; 4]]);

    let left = apply_move(&start, Direction::Left);
    assert_eq!(left.board, board(&[[4, 0, 0, 0], [0; 4], [4, 0, 0, 0], [0; 4]]));
    assert_eq!(left.score_delta, 4);

    let right = apply_move(&start, Direction::Right);
    assert_eq!(right.board, board(&[[0, 0, 0, 4], [0; 4], [0, 0, 0, 4], [0; 4]]));
    assert_eq!(right.score_delta, 4);

    let up = apply_move(&start, Direction::Up);
    assert_eq!(up.board, board(&[[2, 4, 0, 2], [0; 4], [0; 4], [0; 4]]));
    assert_eq!(up.score_delta, 0);
    assert!(up.moved);

    let down = apply_move(&start, Direction::Down);
    assert_eq!(down.board, board(&[[0; 4], [0; 4], [0; 4], [2, 4, 0, 2]]));
    assert!(down.moved);
}

#[test]
fn test_spawn_on_full_board_is_noop() {
    let full = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let mut rng = StdRng::seed_from_u64(0);
    let (after, spawn) = spawn_tile(&full, &mut rng);
    assert_eq!(after, full);
    assert!(spawn.is_none());
}

#[test]
fn test_spawn_fills_an_empty_cell() {
    let start = board(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let mut rng = StdRng::seed_from_u64(11);
    let (after, spawn) = spawn_tile(&start, &mut rng);
    let spawn = spawn.expect("room to spawn");
    assert_eq!(start.get(spawn.row, spawn.col), Some(0));
    assert!(spawn.value == 2 || spawn.value == 4);
    assert_eq!(after.tile_count(), 2);
}

#[test]
fn test_checkerboard_is_terminal() {
    let checkerboard = Board::from_rows(&[[2, 4], [4, 2]]).expect("valid board");
    assert!(is_terminal(&checkerboard));
    assert!(!has_empty_cell(&checkerboard));
}

#[test]
fn test_full_board_with_merge_is_not_terminal() {
    let full = board(&[[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
    assert!(!has_empty_cell(&full));
    assert!(!is_terminal(&full));
}

#[test]
fn test_moves_conserve_tile_sum() {
    let mut rng = StdRng::seed_from_u64(2048);
    let mut current = Board::new(4).expect("valid size");

    for _ in 0..200 {
        let (spawned, _) = spawn_tile(&current, &mut rng);
        let direction = Direction::ALL[rng.gen_range(0..4)];
        let result = apply_move(&spawned, direction);

        assert_eq!(result.board.tile_sum(), spawned.tile_sum());
        assert!(result.board.tile_count() <= spawned.tile_count());
        if !result.moved {
            assert_eq!(result.board, spawned);
            assert_eq!(result.score_delta, 0);
        }

        current = if is_terminal(&result.board) {
            Board::new(4).expect("valid size")
        } else {
            result.board
        };
    }
}

#[test]
fn test_delta_is_sum_of_merged_tiles() {
    let start = board(&[[2, 2, 4, 4], [8, 8, 0, 0], [0; 4], [0; 4]]);
    let result = apply_move(&start, Direction::Left);
    assert_eq!(result.score_delta, 4 + 8 + 16);
    assert_eq!(result.board, board(&[[4, 8, 0, 0], [16, 0, 0, 0], [0; 4], [0; 4]]));
}
