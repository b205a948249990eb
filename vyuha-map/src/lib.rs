//! # VyuhaMap
//!
//! Believed-world map for an agent exploring a maze it cannot see.
//!
//! ## Overview
//!
//! The agent only learns about the world through single-step moves. Every
//! answer is recorded in a [`VirtualMap`] whose cells hold one of:
//!
//! - **Unknown** - Not visited and not inferred
//! - **Path** - The agent has stood here
//! - **Wall** - A move into this cell was refused
//!
//! The map is a square grid with the agent starting at its center, large
//! enough that the agent can wander in any direction without reallocation.
//!
//! ## Quick Start
//!
//! ```rust
//! use vyuha_map::{CellState, Direction, Passability, VirtualMap};
//!
//! let mut map = VirtualMap::new(16);
//! let start = map.center();
//! map.set_cell_state(start, CellState::Path);
//! map.set_cell_state(start.step(Direction::Up), CellState::Wall);
//!
//! assert_eq!(map.check(Direction::Up, start, false), Passability::Blocked);
//! assert_eq!(map.check(Direction::Down, start, false), Passability::Passable);
//! ```
//!
//! ## Coordinate System
//!
//! Positions are `(row, col)`. Rows grow downward (`Up` is row - 1) and
//! columns grow rightward, matching maze text files.

#![warn(missing_docs)]

// Direction, Position, CellState
pub mod core;

// Believed map storage
pub mod grid;

// Maze files and map export
pub mod io;

mod error;

pub use crate::core::{CellState, Direction, Position};
pub use error::MapError;
pub use crate::grid::{CellCounts, Passability, VirtualMap};
