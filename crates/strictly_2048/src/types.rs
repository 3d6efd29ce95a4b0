//! Core domain types for 2048.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Board dimension used when none is specified.
pub const DEFAULT_SIZE: usize = 4;

/// Smallest board dimension the engine accepts.
pub const MIN_SIZE: usize = 2;

/// Largest board dimension the engine accepts.
pub const MAX_SIZE: usize = 16;

/// Largest tile a `u32` cell can hold. Tiles of this value never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Direction of a move.
///
/// Declaration order is the canonical ordering `Up, Right, Down, Left`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// Slide tiles towards row 0.
    Up,
    /// Slide tiles towards the last column.
    Right,
    /// Slide tiles towards the last row.
    Down,
    /// Slide tiles towards column 0.
    Left,
}

impl Direction {
    /// All four directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Index of this direction in the canonical ordering.
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Number of counter-clockwise quarter turns that bring this
    /// direction onto `Left`.
    ///
    /// Undo with the same number of clockwise turns.
    pub fn quarter_turns(self) -> usize {
        (self.index() + 1) % 4
    }
}

/// Error building a board from external data.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Requested dimension is below [`MIN_SIZE`].
    #[display("Board size {} is below the minimum of {}", size, MIN_SIZE)]
    TooSmall {
        /// Requested dimension.
        size: usize,
    },

    /// Requested dimension is above [`MAX_SIZE`].
    #[display("Board size {} is above the maximum of {}", size, MAX_SIZE)]
    TooLarge {
        /// Requested dimension.
        size: usize,
    },

    /// Flat cell data does not fill an N×N grid.
    #[display("Board of size {} needs {} cells, got {}", size, size * size, len)]
    WrongCellCount {
        /// Declared dimension.
        size: usize,
        /// Cells supplied.
        len: usize,
    },

    /// A row does not have as many cells as there are rows.
    #[display("Row {} has {} cells, expected {}", row, len, expected)]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Cells found in the row.
        len: usize,
        /// Cells required.
        expected: usize,
    },

    /// A cell holds something other than 0 or a power of two ≥ 2.
    #[display("Cell ({}, {}) holds {}, which is not a tile value", row, col, value)]
    InvalidTile {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Value found.
        value: u32,
    },
}

/// Returns true if `value` may appear on a board (0 or a power of two ≥ 2).
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Returns true if two neighbouring cells combine when slid together.
///
/// Empty cells never merge, and neither do tiles at [`MAX_TILE`], whose
/// double does not fit in a cell.
pub fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size < MIN_SIZE {
        return Err(BoardError::TooSmall { size });
    }
    if size > MAX_SIZE {
        return Err(BoardError::TooLarge { size });
    }
    Ok(())
}

/// Square 2048 grid.
///
/// Cells are stored in row-major order. 0 is an empty cell. Deserialized
/// boards go through the same checks as [`Board::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

/// Unchecked wire shape of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<u32>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        check_size(repr.size)?;
        if repr.cells.len() != repr.size * repr.size {
            return Err(BoardError::WrongCellCount {
                size: repr.size,
                len: repr.cells.len(),
            });
        }
        let rows: Vec<&[u32]> = repr.cells.chunks(repr.size).collect();
        Self::from_rows(&rows)
    }
}

impl Board {
    /// Creates an empty board of the given dimension.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self::blank(size))
    }

    /// Empty board for a dimension already known to be valid.
    pub(crate) fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a board from rows, validating shape and tile values.
    #[instrument(skip(rows))]
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
            cells.extend_from_slice(values);
        }

        Ok(Self { size, cells })
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Writes a value. Callers guarantee the coordinates are in bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        let size = self.size;
        self.cells[row * size + col] = value;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Single row as a slice.
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        self.cells.chunks(self.size).nth(row)
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// Replaces a row. Callers guarantee the length matches.
    pub(crate) fn set_row(&mut self, row: usize, values: &[u32]) {
        let start = row * self.size;
        self.cells[start..start + self.size].copy_from_slice(values);
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Largest tile on the board (0 on an empty board).
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::blank(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.highest_tile().to_string().len().max(1);
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|&value| {
                    if value == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{:>width$}", value)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Outcome of applying a direction to a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Board after sliding and merging, in the original orientation.
    pub board: Board,
    /// Sum of every merged value produced by the move.
    pub score_delta: u64,
    /// True if any cell changed.
    pub moved: bool,
}

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    /// Row of the new tile.
    pub row: usize,
    /// Column of the new tile.
    pub col: usize,
    /// Value placed (2 or 4).
    pub value: u32,
}
