//! Cardinal movement directions.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MapError;

/// One of the four single-cell moves available to the agent.
///
/// Rows grow downward, so `Up` decreases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row - 1
    Up,
    /// Towards row + 1
    Down,
    /// Towards col - 1
    Left,
    /// Towards col + 1
    Right,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that undoes this one.
    #[inline]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row and column delta of a single step.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The two directions at right angles to this one, in push order.
    ///
    /// The last element ends up on top of a stack, so it is tried first:
    /// vertical moves yield `[Right, Left]`, horizontal moves `[Up, Down]`.
    #[inline]
    pub fn perpendicular(self) -> [Direction; 2] {
        if self.is_vertical() {
            [Direction::Right, Direction::Left]
        } else {
            [Direction::Up, Direction::Down]
        }
    }

    /// True for `Up` and `Down`.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Upper-case command name (`"UP"`, `"DOWN"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = MapError;

    /// Parse a command name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MapError::UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d, d.inverse());
            assert_eq!(d, d.inverse().inverse());
        }
    }

    #[test]
    fn test_offsets_cancel() {
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            let (ir, ic) = d.inverse().offset();
            assert_eq!((dr + ir, dc + ic), (0, 0));
        }
    }

    #[test]
    fn test_perpendicular_order() {
        assert_eq!(
            Direction::Up.perpendicular(),
            [Direction::Right, Direction::Left]
        );
        assert_eq!(
            Direction::Down.perpendicular(),
            [Direction::Right, Direction::Left]
        );
        assert_eq!(
            Direction::Left.perpendicular(),
            [Direction::Up, Direction::Down]
        );
        assert_eq!(
            Direction::Right.perpendicular(),
            [Direction::Up, Direction::Down]
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" down ".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert!("north".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }
}
