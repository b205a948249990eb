//! A single DFS work item.

use vyuha_map::{Direction, Position};

/// One pending attempt: "walk `direction` starting from `origin`".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    /// Direction this branch walks in
    pub direction: Direction,
    /// Believed position when the branch was created
    pub origin: Position,
    /// Cells advanced in `direction` while this branch was on top
    pub step_count: u32,
    /// Already forked into perpendicular children; only a backtrack target now
    pub explored: bool,
}

impl Branch {
    /// A fresh, unexplored branch.
    pub fn new(origin: Position, direction: Direction) -> Self {
        Self {
            direction,
            origin,
            step_count: 0,
            explored: false,
        }
    }

    /// Where the agent stands when this branch is on top of the frontier.
    pub fn tip(&self) -> Position {
        let (dr, dc) = self.direction.offset();
        let n = self.step_count as i32;
        Position::new(self.origin.row + dr * n, self.origin.col + dc * n)
    }
}
