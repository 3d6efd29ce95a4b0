//! Every tile is a power of two.

use super::super::{GameInProgress, is_tile_value};
use super::Invariant;

/// Invariant: every non-zero cell holds a power of two ≥ 2.
pub struct PowerOfTwoTilesInvariant;

impl Invariant<GameInProgress> for PowerOfTwoTilesInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.board().cells().iter().all(|&value| is_tile_value(value))
    }

    fn description() -> &'static str {
        "Every tile is a power of two"
    }
}
