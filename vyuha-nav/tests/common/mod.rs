//! Maze fixtures shared by the integration tests.

#![allow(dead_code)]

use vyuha_map::Position;
use vyuha_map::io::MazeGrid;
use vyuha_nav::exploration::{Explorer, ExplorerConfig};
use vyuha_nav::oracle::GridMaze;

/// 5x5, walled border with one exit on the right edge; start at the center.
pub const FIVE_BY_FIVE: &str = "\
.....
.   .
.   X
.   .
.....
";

/// Start sits at a junction; the preferred direction (up) is a dead-end
/// pocket three cells deep, and the exit is two cells down.
pub const POCKET: &str = "\
.....
.. ..
.. ..
.. ..
..S..
.. ..
..X..
.....
";

/// Fully enclosed room with no exit.
pub const ENCLOSED: &str = "\
.....
.S  .
.   .
.....
";

/// Rooms and corridors with the exit far from the start.
pub const ROOMS: &str = "\
...............
.S       .    .
.  ...   .    .
.    .   ...  .
.    .        .
..... ....... .
.           . .
. ......... . .
.         .   X
...............
";

pub fn grid(text: &str) -> MazeGrid {
    MazeGrid::parse(text).expect("fixture maze should parse")
}

/// Maze with an explicit start.
pub fn maze_at(text: &str, start: Position) -> GridMaze {
    GridMaze::new(grid(text), start).expect("fixture start should be open")
}

/// Maze started on its 'S' marker.
pub fn maze(text: &str) -> GridMaze {
    GridMaze::from_start_marker(grid(text)).expect("fixture should have an 'S'")
}

/// Small-map explorer with tracing enabled.
pub fn traced_explorer() -> Explorer {
    Explorer::new(ExplorerConfig {
        half_extent: 32,
        record_trace: true,
        ..Default::default()
    })
}
