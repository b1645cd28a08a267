//! Error types for topology construction and queries.

use labyrinth_core::Position;
use std::fmt;

/// Errors arising from topology construction or cell lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// A position is outside the bounds of the grid.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Number of rows in the grid.
        rows: u32,
        /// Number of columns in the grid.
        cols: u32,
    },
    /// A row's length differs from the first row's.
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Attempted to construct a topology with zero cells.
    Empty,
    /// A dimension exceeds the maximum allowed value.
    DimensionTooLarge {
        /// Which dimension (e.g. "rows", "cols").
        name: &'static str,
        /// The value provided.
        value: usize,
        /// The maximum allowed.
        max: usize,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "position {position} out of bounds: [0, {rows}) x [0, {cols})"
                )
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "topology is not rectangular: row {row} has {found} cells, expected {expected}"
                )
            }
            Self::Empty => write!(f, "topology must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for TopologyError {}
