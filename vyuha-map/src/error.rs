//! Error types for VyuhaMap

use thiserror::Error;

/// Errors raised while reading or writing maze and map files.
#[derive(Error, Debug)]
pub enum MapError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Maze text contained no rows
    #[error("Maze grid is empty")]
    EmptyGrid,

    /// Direction name outside UP/DOWN/LEFT/RIGHT
    #[error("Unknown direction: {0:?}")]
    UnknownDirection(String),
}
