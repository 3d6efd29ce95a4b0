//! Random tile placement.

use super::{Board, Spawn};
use rand::Rng;
use tracing::{debug, instrument};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// Places a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
///
/// A full board is returned unchanged with `None`; use
/// [`has_empty_cell`](crate::has_empty_cell) to tell the cases apart up front.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn spawn_tile<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> (Board, Option<Spawn>) {
    let empty = board.empty_cells();
    if empty.is_empty() {
        debug!("No empty cell to spawn into");
        return (board.clone(), None);
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen_bool(TWO_PROBABILITY) { 2 } else { 4 };

    let mut next = board.clone();
    next.set(row, col, value);
    debug!(row, col, value, "Spawned tile");
    (next, Some(Spawn { row, col, value }))
}
