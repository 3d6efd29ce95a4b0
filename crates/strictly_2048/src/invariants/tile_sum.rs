//! Tile mass is only added by spawns.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: the board's tile sum equals the sum of every spawned tile.
///
/// Slides move tiles and merges combine them, neither changes the total.
pub struct TileSumConservedInvariant;

impl Invariant<GameInProgress> for TileSumConservedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let opening: u64 = game.opening().iter().map(|s| u64::from(s.value)).sum();
        let spawned: u64 = game
            .history()
            .iter()
            .filter_map(|turn| turn.spawn)
            .map(|s| u64::from(s.value))
            .sum();
        game.board().tile_sum() == opening + spawned
    }

    fn description() -> &'static str {
        "Tile sum equals the sum of spawned tiles"
    }
}
