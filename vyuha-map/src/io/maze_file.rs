//! Ground-truth maze grids in plain text.
//!
//! Format: one line per row.
//! - `.` is a wall
//! - `X` is an exit
//! - anything else is open ground
//!
//! Rows may differ in length; cells past the end of a short row read as wall.
//! An `S` cell is open ground that also marks a default start position.

use std::path::Path;

use crate::core::Position;
use crate::error::MapError;

/// Wall character in maze files.
pub const WALL_CHAR: char = '.';
/// Exit character in maze files.
pub const EXIT_CHAR: char = 'X';
/// Optional start marker in maze files.
pub const START_CHAR: char = 'S';

/// Ground-truth contents of one maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeCell {
    /// Walkable ground
    Open,
    /// Impassable
    Wall,
    /// Reaching this cell ends the search
    Exit,
}

impl MazeCell {
    /// Classify a maze file character.
    #[inline]
    pub fn from_char(c: char) -> Self {
        match c {
            WALL_CHAR => MazeCell::Wall,
            EXIT_CHAR => MazeCell::Exit,
            _ => MazeCell::Open,
        }
    }
}

/// A maze parsed from text.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    rows: Vec<Vec<char>>,
}

impl MazeGrid {
    /// Parse maze text. Trailing `\r` is stripped from each line.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();

        if rows.is_empty() || rows.iter().all(|r| r.is_empty()) {
            return Err(MapError::EmptyGrid);
        }

        Ok(Self { rows })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Raw character at a position, if the row has one there.
    pub fn char_at(&self, position: Position) -> Option<char> {
        if position.row < 0 || position.col < 0 {
            return None;
        }
        self.rows
            .get(position.row as usize)
            .and_then(|row| row.get(position.col as usize))
            .copied()
    }

    /// Cell at a position. Anything outside the text reads as wall.
    pub fn cell(&self, position: Position) -> MazeCell {
        self.char_at(position)
            .map(MazeCell::from_char)
            .unwrap_or(MazeCell::Wall)
    }

    /// First position holding `marker`, scanning rows top to bottom.
    pub fn find(&self, marker: char) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|&c| c == marker)
                .map(|c| Position::new(r as i32, c as i32))
        })
    }

    /// The `S` marker, if the file has one.
    pub fn start_marker(&self) -> Option<Position> {
        self.find(START_CHAR)
    }

    /// All exit positions.
    pub fn exits(&self) -> Vec<Position> {
        let mut exits = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                if ch == EXIT_CHAR {
                    exits.push(Position::new(r as i32, c as i32));
                }
            }
        }
        exits
    }
}

/// Load a maze grid from a text file.
pub fn load_maze(path: &Path) -> Result<MazeGrid, MapError> {
    let text = std::fs::read_to_string(path)?;
    let grid = MazeGrid::parse(&text)?;
    log::debug!(
        "Loaded {}x{} maze from {:?} ({} exits)",
        grid.height(),
        grid.width(),
        path,
        grid.exits().len()
    );
    Ok(grid)
}
