//! Blind depth-first exploration.
//!
//! This module provides:
//! - Branches and the LIFO frontier they live on
//! - The explorer loop with physical backtracking

mod branch;
mod explorer;
mod frontier;

pub use branch::Branch;
pub use explorer::{
    ExplorationEvent, ExplorationOutcome, ExplorationState, ExplorationStats, Explorer,
    ExplorerConfig,
};
pub use frontier::Frontier;
