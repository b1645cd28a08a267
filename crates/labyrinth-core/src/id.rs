//! Grid positions and flattened state identifiers.

use std::fmt;

/// A `(row, col)` cell coordinate. Increasing `row` is south.
///
/// Coordinates are signed so that a candidate position one step past
/// the grid edge is representable; bounds are checked by the topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (0 is the top row).
    pub row: i32,
    /// Column index (0 is the leftmost column).
    pub col: i32,
}

impl Position {
    /// Create a position from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Component-wise addition of a `(d_row, d_col)` displacement.
    ///
    /// Saturates instead of overflowing; a saturated coordinate is
    /// always outside any grid.
    pub fn offset(self, (d_row, d_col): (i32, i32)) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Integer state observation: a row-major index into the grid, or the
/// synthetic absorbing state one past the last cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StateId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

impl From<StateId> for usize {
    fn from(s: StateId) -> Self {
        s.0
    }
}
