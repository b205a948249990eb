//! Error types for VyuhaNav

use thiserror::Error;
use vyuha_map::{Direction, MapError, Position};

use crate::oracle::MoveResult;

/// Failures inside the exploration loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorationError {
    /// A backtracking move over known trail was not answered with `Moved`.
    #[error("Oracle answered {result:?} while retracing {direction} from {position}")]
    Diverged {
        /// Believed position when the move was refused
        position: Position,
        /// Direction of the retrace move
        direction: Direction,
        /// What the oracle answered instead of `Moved`
        result: MoveResult,
    },
}

/// VyuhaNav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Maze error: {0}")]
    Maze(String),

    #[error("Exploration error: {0}")]
    Exploration(#[from] ExplorationError),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
