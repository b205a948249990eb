//! The DFS work list.

use super::branch::Branch;

/// Strict LIFO stack of [`Branch`]es.
///
/// Only the top is ever mutated. Iteration is read-only and runs bottom to
/// top, which is the order the branches were walked in.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    branches: Vec<Branch>,
    peak_depth: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a branch on top.
    pub fn push(&mut self, branch: Branch) {
        self.branches.push(branch);
        self.peak_depth = self.peak_depth.max(self.branches.len());
    }

    /// Remove and return the top branch.
    pub fn pop(&mut self) -> Option<Branch> {
        self.branches.pop()
    }

    /// The active branch.
    pub fn peek(&self) -> Option<&Branch> {
        self.branches.last()
    }

    /// Mutable access to the active branch.
    pub fn peek_mut(&mut self) -> Option<&mut Branch> {
        self.branches.last_mut()
    }

    /// Number of pending branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// True when nothing is left to explore.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Largest depth reached so far.
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }

    /// Branches from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Branch> {
        self.branches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vyuha_map::{Direction, Position};

    #[test]
    fn test_lifo_order() {
        let origin = Position::new(0, 0);
        let mut frontier = Frontier::new();
        frontier.push(Branch::new(origin, Direction::Down));
        frontier.push(Branch::new(origin, Direction::Up));

        assert_eq!(frontier.peek().unwrap().direction, Direction::Up);
        assert_eq!(frontier.pop().unwrap().direction, Direction::Up);
        assert_eq!(frontier.pop().unwrap().direction, Direction::Down);
        assert!(frontier.pop().is_none());
        assert!(frontier.is_empty());
        assert_eq!(frontier.peak_depth(), 2);
    }

    #[test]
    fn test_peek_mut_touches_top_only() {
        let origin = Position::new(3, 3);
        let mut frontier = Frontier::new();
        frontier.push(Branch::new(origin, Direction::Left));
        frontier.push(Branch::new(origin, Direction::Right));

        frontier.peek_mut().unwrap().step_count += 2;

        let steps: Vec<u32> = frontier.iter().map(|b| b.step_count).collect();
        assert_eq!(steps, vec![0, 2]);
    }
}
