//! VyuhaNav - Blind maze exploration
//!
//! An agent that cannot see the maze finds an exit using only single-step
//! moves that answer blocked, moved, or exit-found.
//!
//! ## Components
//!
//! - **Oracle** ([`oracle`]): owns the real maze and answers one move at a time
//! - **Explorer** ([`exploration`]): depth-first search over a believed map,
//!   backtracking by physically walking back along its own trail
//! - **Config** ([`config`]): TOML settings for the command-line runner
//!
//! ```rust,ignore
//! use vyuha_nav::exploration::{Explorer, ExplorerConfig, ExplorationOutcome};
//! use vyuha_nav::oracle::GridMaze;
//!
//! let mut maze = GridMaze::new(grid, start)?;
//! let mut explorer = Explorer::new(ExplorerConfig::default());
//! match explorer.run(&mut maze)? {
//!     ExplorationOutcome::ExitFound { route, .. } => println!("{} moves", route.len()),
//!     ExplorationOutcome::NoSolution => println!("no exit"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod exploration;
pub mod oracle;

pub use config::NavConfig;
pub use error::{ExplorationError, NavError, Result};
pub use exploration::{ExplorationOutcome, ExplorationState, Explorer, ExplorerConfig};
pub use oracle::{GridMaze, MazeOracle, MoveResult};
