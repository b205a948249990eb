//! Text formats.
//!
//! - **Maze files**: ground-truth grids read by the oracle simulator
//! - **Map export**: the believed map rendered as characters for inspection
//!
//! ```rust,ignore
//! use vyuha_map::io::{load_maze, save_text_map, TextMapOptions};
//! use std::path::Path;
//!
//! let maze = load_maze(Path::new("resources/maze.txt"))?;
//! save_text_map(&map, &TextMapOptions::default(), Path::new("output/virtual-maze.txt"))?;
//! ```

mod maze_file;
mod text_map;

pub use maze_file::{EXIT_CHAR, MazeCell, MazeGrid, START_CHAR, WALL_CHAR, load_maze};
pub use text_map::{Crop, Legend, TextMapOptions, render_rows, save_text_map, write_text_map};
