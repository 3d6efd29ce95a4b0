//! Quarter-turn rotations of a board.

use super::super::Board;
use tracing::instrument;

/// Rotates the board 90° clockwise.
///
/// The bottom of column `c` becomes the start of row `c`.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn rotate_clockwise(board: &Board) -> Board {
    let n = board.size();
    let mut rotated = Board::blank(n);
    for row in 0..n {
        for col in 0..n {
            rotated.set(row, col, board.cells()[(n - 1 - col) * n + row]);
        }
    }
    rotated
}

/// Rotates the board 90° counter-clockwise.
///
/// The top of column `n - 1 - r` becomes the start of row `r`.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn rotate_counter_clockwise(board: &Board) -> Board {
    let n = board.size();
    let mut rotated = Board::blank(n);
    for row in 0..n {
        for col in 0..n {
            rotated.set(row, col, board.cells()[col * n + (n - 1 - row)]);
        }
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Board {
        Board::from_rows(&[
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [0, 2, 0, 4],
        ])
        .expect("valid board")
    }

    #[test]
    fn test_clockwise() {
        let board = Board::from_rows(&[[2, 4], [8, 16]]).expect("valid board");
        let expected = Board::from_rows(&[[8, 2], [16, 4]]).expect("valid board");
        assert_eq!(rotate_clockwise(&board), expected);
    }

    #[test]
    fn test_counter_clockwise() {
        let board = Board::from_rows(&[[2, 4], [8, 16]]).expect("valid board");
        let expected = Board::from_rows(&[[4, 16], [2, 8]]).expect("valid board");
        assert_eq!(rotate_counter_clockwise(&board), expected);
    }

    #[test]
    fn test_four_clockwise_turns_round_trip() {
        let board = numbered();
        let mut rotated = board.clone();
        for _ in 0..4 {
            rotated = rotate_clockwise(&rotated);
        }
        assert_eq!(rotated, board);
    }

    #[test]
    fn test_rotations_are_inverse() {
        let board = numbered();
        assert_eq!(rotate_counter_clockwise(&rotate_clockwise(&board)), board);
        assert_eq!(rotate_clockwise(&rotate_counter_clockwise(&board)), board);
    }
}
