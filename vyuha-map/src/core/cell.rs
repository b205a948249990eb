//! Believed cell states.

/// What the agent believes about a single cell.
///
/// Transitions are one-way: `Unknown` becomes `Path` or `Wall` and never
/// goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Not visited and not inferred
    #[default]
    Unknown = 0,
    /// The agent has stood here
    Path = 1,
    /// The oracle refused a move into this cell
    Wall = 2,
}

impl CellState {
    /// Convert from the raw storage byte. Unrecognized values read as Unknown.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellState::Path,
            2 => CellState::Wall,
            _ => CellState::Unknown,
        }
    }

    /// Is this cell anything but Unknown?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_round_trip() {
        for state in [CellState::Unknown, CellState::Path, CellState::Wall] {
            assert_eq!(CellState::from_u8(state as u8), state);
        }
        assert_eq!(CellState::from_u8(200), CellState::Unknown);
    }
}
