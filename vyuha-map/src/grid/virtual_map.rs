//! The agent's believed map.

use crate::core::{CellState, Direction, Position};

/// Result of inspecting a neighboring cell without moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Passability {
    /// The neighbor may be entered
    Passable,
    /// The neighbor is a wall, known trail, or outside the grid
    Blocked,
}

impl Passability {
    /// True for [`Passability::Passable`].
    #[inline]
    pub fn is_passable(self) -> bool {
        self == Passability::Passable
    }
}

/// Cell counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Cells never visited or inferred.
    pub unknown: usize,
    /// Cells the agent has stood on.
    pub path: usize,
    /// Cells the oracle refused.
    pub wall: usize,
}

impl CellCounts {
    /// Total known cells.
    pub fn known(&self) -> usize {
        self.path + self.wall
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}

/// Square grid of [`CellState`] centered on the agent's starting cell.
///
/// The grid measures `2 * half_extent + 1` cells per side, so an agent that
/// starts at [`VirtualMap::center`] can walk `half_extent` cells in any
/// direction before reaching the edge. Cells outside the grid read as
/// `Unknown` and every neighbor check into them reports `Blocked`.
///
/// States are stored as one byte per cell in row-major order.
#[derive(Clone, Debug)]
pub struct VirtualMap {
    cells: Vec<u8>,
    width: usize,
    height: usize,
    half_extent: usize,
}

impl VirtualMap {
    /// Default reach in each direction from the center (1997 x 1997 grid).
    pub const DEFAULT_HALF_EXTENT: usize = 998;

    /// Largest supported reach (16385 x 16385 grid, 256 MiB of cells).
    pub const MAX_HALF_EXTENT: usize = 8_192;

    /// Create an all-Unknown map reaching `half_extent` cells from its center.
    ///
    /// Values above [`VirtualMap::MAX_HALF_EXTENT`] are clamped to it.
    pub fn new(half_extent: usize) -> Self {
        if half_extent > Self::MAX_HALF_EXTENT {
            log::warn!(
                "half_extent {} exceeds {}, clamping",
                half_extent,
                Self::MAX_HALF_EXTENT
            );
        }
        let half_extent = half_extent.min(Self::MAX_HALF_EXTENT);
        let side = half_extent * 2 + 1;
        Self {
            cells: vec![CellState::Unknown as u8; side * side],
            width: side,
            height: side,
            half_extent,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell the agent starts on.
    #[inline]
    pub fn center(&self) -> Position {
        let c = self.half_extent as i32;
        Position::new(c, c)
    }

    /// Is this position inside the grid?
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.height
            && (position.col as usize) < self.width
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row as usize * self.width + position.col as usize)
        } else {
            None
        }
    }

    /// Believed state of a cell.
    #[inline]
    pub fn cell_state(&self, position: Position) -> CellState {
        self.index(position)
            .map(|i| CellState::from_u8(self.cells[i]))
            .unwrap_or_default()
    }

    /// Overwrite the state of a cell. Writes outside the grid are ignored.
    ///
    /// Returns true if the cell was inside the grid.
    pub fn set_cell_state(&mut self, position: Position, state: CellState) -> bool {
        match self.index(position) {
            Some(i) => {
                self.cells[i] = state as u8;
                true
            }
            None => false,
        }
    }

    /// Inspect the neighbor of `from` in `direction` without moving.
    ///
    /// Wall is always blocked and Unknown always passable. Path is passable
    /// only when `treat_path_as_passable` is set; exploration decisions leave
    /// it unset so the agent never re-walks its own trail.
    pub fn check(
        &self,
        direction: Direction,
        from: Position,
        treat_path_as_passable: bool,
    ) -> Passability {
        let target = from.step(direction);
        if !self.contains(target) {
            return Passability::Blocked;
        }

        match self.cell_state(target) {
            CellState::Unknown => Passability::Passable,
            CellState::Path if treat_path_as_passable => Passability::Passable,
            CellState::Path | CellState::Wall => Passability::Blocked,
        }
    }

    /// Count cells by state.
    pub fn count_by_state(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &raw in &self.cells {
            match CellState::from_u8(raw) {
                CellState::Unknown => counts.unknown += 1,
                CellState::Path => counts.path += 1,
                CellState::Wall => counts.wall += 1,
            }
        }
        counts
    }

    /// Tight bounding box `(min, max)` of all known cells, inclusive.
    ///
    /// Returns `None` while every cell is Unknown.
    pub fn known_bounds(&self) -> Option<(Position, Position)> {
        let mut bounds: Option<(Position, Position)> = None;

        for (i, &raw) in self.cells.iter().enumerate() {
            if !CellState::from_u8(raw).is_known() {
                continue;
            }
            let p = Position::new((i / self.width) as i32, (i % self.width) as i32);
            bounds = Some(match bounds {
                None => (p, p),
                Some((min, max)) => (
                    Position::new(min.row.min(p.row), min.col.min(p.col)),
                    Position::new(max.row.max(p.row), max.col.max(p.col)),
                ),
            });
        }

        bounds
    }
}

impl Default for VirtualMap {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_creation() {
        let map = VirtualMap::new(3);
        assert_eq!(map.width(), 7);
        assert_eq!(map.height(), 7);
        assert_eq!(map.center(), Position::new(3, 3));
        assert_eq!(map.count_by_state().unknown, 49);
        assert!(map.known_bounds().is_none());
    }

    #[test]
    fn test_default_size() {
        let map = VirtualMap::default();
        assert_eq!(map.width(), 1997);
        assert_eq!(map.center(), Position::new(998, 998));
    }

    #[test]
    fn test_check_rules() {
        let mut map = VirtualMap::new(2);
        let c = map.center();
        map.set_cell_state(c.step(Direction::Up), CellState::Wall);
        map.set_cell_state(c.step(Direction::Left), CellState::Path);

        // Wall is blocked either way
        assert_eq!(map.check(Direction::Up, c, false), Passability::Blocked);
        assert_eq!(map.check(Direction::Up, c, true), Passability::Blocked);

        // Path depends on the flag
        assert_eq!(map.check(Direction::Left, c, false), Passability::Blocked);
        assert_eq!(map.check(Direction::Left, c, true), Passability::Passable);

        // Unknown is passable either way
        assert_eq!(map.check(Direction::Down, c, false), Passability::Passable);
        assert_eq!(map.check(Direction::Down, c, true), Passability::Passable);
    }

    #[test]
    fn test_edge_is_blocked() {
        let map = VirtualMap::new(1);
        let corner = Position::new(0, 0);
        assert_eq!(map.check(Direction::Up, corner, true), Passability::Blocked);
        assert_eq!(
            map.check(Direction::Left, corner, true),
            Passability::Blocked
        );
        assert_eq!(
            map.check(Direction::Right, corner, false),
            Passability::Passable
        );
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut map = VirtualMap::new(1);
        let outside = Position::new(-1, 5);
        assert_eq!(map.cell_state(outside), CellState::Unknown);
        assert!(!map.set_cell_state(outside, CellState::Wall));
        assert_eq!(map.count_by_state().known(), 0);
    }

    #[test]
    fn test_counts_and_bounds() {
        let mut map = VirtualMap::new(4);
        map.set_cell_state(Position::new(2, 3), CellState::Path);
        map.set_cell_state(Position::new(5, 1), CellState::Wall);
        map.set_cell_state(Position::new(4, 6), CellState::Path);

        let counts = map.count_by_state();
        assert_eq!(counts.path, 2);
        assert_eq!(counts.wall, 1);
        assert_eq!(counts.total(), 81);

        let (min, max) = map.known_bounds().unwrap();
        assert_eq!(min, Position::new(2, 1));
        assert_eq!(max, Position::new(5, 6));
    }

    #[test]
    fn test_oversized_extent_is_clamped() {
        let map = VirtualMap::new(usize::MAX);
        let side = VirtualMap::MAX_HALF_EXTENT * 2 + 1;
        assert_eq!(map.width(), side);
        assert_eq!(map.height(), side);

        let c = VirtualMap::MAX_HALF_EXTENT as i32;
        assert_eq!(map.center(), Position::new(c, c));
    }
}
