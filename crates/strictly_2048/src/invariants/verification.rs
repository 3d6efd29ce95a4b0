//! Bounded proofs of the slide and rotation rules using Kani.

#[cfg(kani)]
mod proofs {
    use crate::rules::{apply_move, rotate_clockwise, slide_left};
    use crate::{Board, Direction};

    fn any_tile() -> u32 {
        let exponent: u8 = kani::any();
        kani::assume(exponent <= 4);
        if exponent == 0 { 0 } else { 1 << exponent }
    }

    /// Proves: sliding a row conserves tile mass and never widens it.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_slide_conserves_sum() {
        let row = [any_tile(), any_tile(), any_tile(), any_tile()];
        let (slid, gained) = slide_left(&row);

        let before: u64 = row.iter().map(|&v| u64::from(v)).sum();
        let after: u64 = slid.iter().map(|&v| u64::from(v)).sum();
        assert_eq!(slid.len(), row.len());
        assert_eq!(before, after);
        assert!(gained <= before);
    }

    /// Proves: four clockwise rotations of a 2×2 board are the identity.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_rotation_round_trip() {
        let rows = [[any_tile(), any_tile()], [any_tile(), any_tile()]];
        if let Ok(board) = Board::from_rows(&rows) {
            let mut rotated = board.clone();
            for _ in 0..4 {
                rotated = rotate_clockwise(&rotated);
            }
            assert!(rotated == board);
        }
    }

    /// Proves: a 2×2 move never changes the tile sum.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_move_conserves_sum() {
        let rows = [[any_tile(), any_tile()], [any_tile(), any_tile()]];
        let direction: Direction = kani::any();
        if let Ok(board) = Board::from_rows(&rows) {
            let result = apply_move(&board, direction);
            assert_eq!(result.board.tile_sum(), board.tile_sum());
        }
    }
}
