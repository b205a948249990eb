//! Believed-world grid storage.
//!
//! [`VirtualMap`] is the only map the explorer ever sees. It is built purely
//! from move outcomes: cells the agent stood on become `Path`, cells the
//! oracle refused become `Wall`, and everything else stays `Unknown`.

mod virtual_map;

pub use virtual_map::{CellCounts, Passability, VirtualMap};
