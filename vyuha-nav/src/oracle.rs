//! The ground-truth side of exploration.
//!
//! The explorer never sees the maze. It only issues single-step requests
//! through [`MazeOracle`] and learns from the answer. [`GridMaze`] answers
//! those requests from a [`MazeGrid`] loaded from text.

use vyuha_map::io::{MazeCell, MazeGrid};
use vyuha_map::{Direction, Position};

use crate::error::{NavError, Result};

/// Answer to a single move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The target cell is impassable; the agent did not move
    Blocked,
    /// The agent is now in the target cell
    Moved,
    /// The target cell is an exit
    ExitFound,
}

/// Something that owns the real maze and answers one move at a time.
///
/// Each call blocks until answered. The agent's real position changes only
/// on [`MoveResult::Moved`] and [`MoveResult::ExitFound`].
pub trait MazeOracle {
    /// Try to move the agent one cell in `direction`.
    fn attempt_move(&mut self, direction: Direction) -> MoveResult;
}

impl<O: MazeOracle + ?Sized> MazeOracle for &mut O {
    fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        (**self).attempt_move(direction)
    }
}

/// Maze simulator backed by a text grid.
#[derive(Clone, Debug)]
pub struct GridMaze {
    grid: MazeGrid,
    start: Position,
    position: Position,
    attempts: u64,
}

impl GridMaze {
    /// Place the agent on `start`, which must be open ground inside the grid.
    pub fn new(grid: MazeGrid, start: Position) -> Result<Self> {
        if grid.char_at(start).is_none() {
            return Err(NavError::Maze(format!(
                "Start {} is outside the {}x{} grid",
                start,
                grid.height(),
                grid.width()
            )));
        }
        if grid.cell(start) != MazeCell::Open {
            return Err(NavError::Maze(format!(
                "Start {} is not open ground",
                start
            )));
        }

        Ok(Self {
            grid,
            start,
            position: start,
            attempts: 0,
        })
    }

    /// Place the agent on the grid's `S` marker.
    pub fn from_start_marker(grid: MazeGrid) -> Result<Self> {
        let start = grid
            .start_marker()
            .ok_or_else(|| NavError::Maze("No start position given and no 'S' in maze".into()))?;
        Self::new(grid, start)
    }

    /// Handle a textual command such as `"UP"` or `"left"`.
    ///
    /// Unrecognized names answer [`MoveResult::Blocked`]; they still count as
    /// an attempt but never move the agent.
    pub fn attempt_named(&mut self, name: &str) -> MoveResult {
        match name.parse::<Direction>() {
            Ok(direction) => self.attempt_move(direction),
            Err(_) => {
                self.attempts += 1;
                tracing::debug!("Ignoring invalid direction {:?}", name);
                MoveResult::Blocked
            }
        }
    }

    /// Real agent position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Where the agent started.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Every move request answered so far, including refused ones.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// The underlying grid.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }
}

impl MazeOracle for GridMaze {
    fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        self.attempts += 1;
        let target = self.position.step(direction);

        match self.grid.cell(target) {
            MazeCell::Wall => MoveResult::Blocked,
            MazeCell::Open => {
                self.position = target;
                MoveResult::Moved
            }
            MazeCell::Exit => {
                self.position = target;
                tracing::debug!("Exit reached after {} attempts", self.attempts);
                MoveResult::ExitFound
            }
        }
    }
}
