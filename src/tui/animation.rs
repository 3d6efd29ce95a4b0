//! Frame-driven move highlighting.
//!
//! After a move, changed cells flash and the new tile pops for a fixed
//! number of frames. Frames advance on the render tick, never by sleeping,
//! so input is accepted while an animation runs.

use std::collections::HashSet;
use strictly_2048::{Board, TurnReport};
use tracing::trace;

/// How a cell should be drawn on the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEffect {
    /// Draw normally.
    None,
    /// The cell's value changed in the last move.
    Changed,
    /// The cell holds the tile spawned after the last move.
    Spawned,
}

/// Highlight state for the most recent move.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: u8,
    remaining: u8,
    changed: HashSet<(usize, usize)>,
    spawned: Option<(usize, usize)>,
}

impl Animation {
    /// An idle animation that runs for `frames` frames when started.
    pub fn new(frames: u8) -> Self {
        Self {
            frames,
            remaining: 0,
            changed: HashSet::new(),
            spawned: None,
        }
    }

    /// Begins highlighting the cells a move touched.
    pub fn start(&mut self, report: &TurnReport, after: &Board) {
        self.changed = report.changed_cells(after).into_iter().collect();
        self.spawned = report.spawn.map(|spawn| (spawn.row, spawn.col));
        if let Some(cell) = self.spawned {
            self.changed.remove(&cell);
        }
        self.remaining = self.frames;
        trace!(cells = self.changed.len(), frames = self.frames, "Animation started");
    }

    /// Advances one frame.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.changed.clear();
            self.spawned = None;
        }
    }

    /// Drops any running highlight.
    pub fn reset(&mut self) {
        self.remaining = 0;
        self.changed.clear();
        self.spawned = None;
    }

    /// Returns true while frames remain.
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Effect for a cell on the current frame.
    ///
    /// The spawned tile only pops during the second half of the animation,
    /// after the slide has settled.
    pub fn effect(&self, row: usize, col: usize) -> CellEffect {
        if !self.is_active() {
            return CellEffect::None;
        }
        if self.spawned == Some((row, col)) {
            return if self.remaining <= self.frames.div_ceil(2) {
                CellEffect::Spawned
            } else {
                CellEffect::None
            };
        }
        if self.changed.contains(&(row, col)) {
            CellEffect::Changed
        } else {
            CellEffect::None
        }
    }
}
