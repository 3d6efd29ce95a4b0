//! Game rules for 2048.
//!
//! Pure functions over [`Board`](super::Board). Every direction is
//! implemented as a left slide on a rotated board.

pub mod moves;
pub mod rotate;
pub mod slide;
pub mod terminal;

pub use moves::apply_move;
pub use rotate::{rotate_clockwise, rotate_counter_clockwise};
pub use slide::slide_left;
pub use terminal::{has_empty_cell, is_terminal};
