//! Core types shared by the map and the explorer.
//!
//! - [`Direction`]: the four single-cell moves, with inverse and perpendicular pairs
//! - [`Position`]: signed (row, col) cell index
//! - [`CellState`]: Unknown / Path / Wall belief for one cell
//!
//! Rows grow downward and columns grow rightward, matching the order in which
//! maze files list their lines and characters.

mod cell;
mod direction;
mod position;

pub use cell::CellState;
pub use direction::Direction;
pub use position::Position;
