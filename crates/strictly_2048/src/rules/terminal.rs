//! Terminal-state detection.

use super::super::types::can_merge;
use super::super::Board;
use tracing::instrument;

/// Returns true if at least one cell is empty.
#[instrument(level = "trace", skip(board))]
pub fn has_empty_cell(board: &Board) -> bool {
    board.cells().contains(&0)
}

/// Returns true if no move can change the board.
///
/// A board is terminal when it is full and no two horizontally or
/// vertically adjacent cells can merge. Each cell is compared
/// with its right and lower neighbour, which covers every adjacent pair.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_terminal(board: &Board) -> bool {
    if has_empty_cell(board) {
        return false;
    }

    let n = board.size();
    let cells = board.cells();
    for row in 0..n {
        for col in 0..n {
            let value = cells[row * n + col];
            if col + 1 < n && can_merge(value, cells[row * n + col + 1]) {
                return false;
            }
            if row + 1 < n && can_merge(value, cells[(row + 1) * n + col]) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_not_terminal() {
        let board = Board::default();
        assert!(has_empty_cell(&board));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_checkerboard_is_terminal() {
        let board = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
            .expect("valid board");
        assert!(!has_empty_cell(&board));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_full_board_with_horizontal_pair_is_not_terminal() {
        let board = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]])
            .expect("valid board");
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_full_board_with_vertical_pair_is_not_terminal() {
        let board = Board::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]])
            .expect("valid board");
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_adjacent_largest_tiles_are_terminal() {
        let max = crate::MAX_TILE;
        let board = Board::from_rows(&[[max, max], [2, 4]]).expect("valid board");
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_terminal_check_does_not_mutate() {
        let board = Board::from_rows(&[[2, 4], [4, 2]]).expect("valid board");
        let before = board.clone();
        assert!(is_terminal(&board));
        assert!(is_terminal(&board));
        assert_eq!(board, before);
    }
}
