//! Single-row slide and merge.

use super::super::types::can_merge;
use tracing::instrument;

/// Slides one row towards index 0, merging equal neighbours.
///
/// Non-zero values are compacted first, then adjacent pairs are scanned
/// once from left to right. A merged pair leaves a zero on its right, and
/// that zero is never merged again in the same pass, so `[2, 2, 2, 2]`
/// becomes `[4, 4, 0, 0]`. Tiles at [`MAX_TILE`](crate::MAX_TILE) stay put.
/// Returns the new row and the sum of merged values.
#[instrument(level = "trace")]
pub fn slide_left(row: &[u32]) -> (Vec<u32>, u64) {
    let mut compacted: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0u64;

    for i in 0..compacted.len().saturating_sub(1) {
        if can_merge(compacted[i], compacted[i + 1]) {
            compacted[i] *= 2;
            gained += u64::from(compacted[i]);
            compacted[i + 1] = 0;
        }
    }

    let mut slid: Vec<u32> = compacted.into_iter().filter(|&v| v != 0).collect();
    slid.resize(row.len(), 0);
    (slid, gained)
}
