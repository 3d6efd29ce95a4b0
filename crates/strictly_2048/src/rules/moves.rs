//! Directional moves built on the left slide.

use super::super::{Board, Direction, MoveResult};
use super::rotate::{rotate_clockwise, rotate_counter_clockwise};
use super::slide::slide_left;
use tracing::{instrument, trace};

/// Applies a move in `direction`, returning the new board and score delta.
///
/// The board is rotated so `direction` points left, every row is slid
/// left, and the board is rotated back into its original orientation.
#[instrument(skip(board), fields(size = board.size()))]
pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    let turns = direction.quarter_turns();

    let mut working = board.clone();
    for _ in 0..turns {
        working = rotate_counter_clockwise(&working);
    }

    let mut score_delta = 0u64;
    let mut moved = false;
    for row in 0..working.size() {
        let original: Vec<u32> = working.rows().nth(row).map(<[u32]>::to_vec).unwrap_or_default();
        let (slid, gained) = slide_left(&original);
        if slid != original {
            moved = true;
            working.set_row(row, &slid);
        }
        score_delta += gained;
    }

    for _ in 0..turns {
        working = rotate_clockwise(&working);
    }

    trace!(moved, score_delta, "Move applied");
    MoveResult {
        board: working,
        score_delta,
        moved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[[u32; 4]; 4]) -> Board {
        Board::from_rows(rows).expect("valid board")
    }

    #[test]
    fn test_largest_tiles_do_not_overflow() {
        let max = crate::MAX_TILE;
        let start = Board::from_rows(&[[max, max], [0, 0]]).expect("valid board");
        let result = apply_move(&start, Direction::Left);
        assert!(!result.moved);
        assert_eq!(result.board, start);

        let down = apply_move(&start, Direction::Down);
        assert!(down.moved);
        assert_eq!(down.score_delta, 0);
        assert_eq!(down.board.tile_sum(), start.tile_sum());
    }

    #[test]
    fn test_left_on_left_edge_is_a_no_op() {
        let start = board(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let result = apply_move(&start, Direction::Left);
        assert!(!result.moved);
        assert_eq!(result.board, start);
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    fn test_each_direction_moves_to_its_edge() {
        let start = board(&[[0; 4], [0, 2, 0, 0], [0; 4], [0; 4]]);

        let up = apply_move(&start, Direction::Up);
        assert_eq!(up.board.get(0, 1), Some(2));

        let down = apply_move(&start, Direction::Down);
        assert_eq!(down.board.get(3, 1), Some(2));

        let left = apply_move(&start, Direction::Left);
        assert_eq!(left.board.get(1, 0), Some(2));

        let right = apply_move(&start, Direction::Right);
        assert_eq!(right.board.get(1, 3), Some(2));

        for result in [up, down, left, right] {
            assert!(result.moved);
            assert_eq!(result.board.tile_count(), 1);
        }
    }

    #[test]
    fn test_right_merges_from_the_right_edge() {
        let start = board(&[[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let result = apply_move(&start, Direction::Right);
        assert_eq!(result.board.row(0), Some(&[0, 0, 2, 4][..]));
        assert_eq!(result.score_delta, 4);
    }

    #[test]
    fn test_up_merges_columns() {
        let start = board(&[[2, 0, 0, 4], [2, 0, 0, 4], [4, 0, 0, 4], [0, 0, 0, 4]]);
        let result = apply_move(&start, Direction::Up);
        let expected = board(&[[4, 0, 0, 8], [4, 0, 0, 8], [0; 4], [0; 4]]);
        assert_eq!(result.board, expected);
        assert_eq!(result.score_delta, 4 + 8 + 8);
    }

    #[test]
    fn test_down_merges_columns() {
        let start = board(&[[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0; 4]]);
        let result = apply_move(&start, Direction::Down);
        let expected = board(&[[0; 4], [0; 4], [2, 0, 0, 0], [4, 0, 0, 0]]);
        assert_eq!(result.board, expected);
        assert_eq!(result.score_delta, 4);
    }

    #[test]
    fn test_move_conserves_tile_sum() {
        let start = board(&[[2, 2, 4, 8], [4, 4, 4, 0], [0, 2, 0, 2], [16, 16, 16, 16]]);
        for direction in Direction::ALL {
            let result = apply_move(&start, direction);
            assert_eq!(result.board.tile_sum(), start.tile_sum(), "{direction}");
        }
    }
}
