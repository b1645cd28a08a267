//! Immutable rectangular grid of cell labels.

use crate::error::TopologyError;
use crate::grid2d;
use labyrinth_core::{label, Action, Position};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A rectangular grid of single-character cell labels.
///
/// Each cell has position `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Cells are stored row-major, so the flattened
/// index of `(row, col)` is `row * cols + col`.
///
/// A topology never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    cells: Vec<char>,
    rows: u32,
    cols: u32,
}

impl Topology {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a topology from equal-length rows of text.
    ///
    /// Returns `Err(TopologyError::Empty)` for zero rows or zero-length
    /// rows, and `Err(TopologyError::Ragged)` if any row's length differs
    /// from the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth_space::Topology;
    /// use labyrinth_core::Position;
    ///
    /// let maze = Topology::from_rows(["###", "#o#", "#*#", "###"]).unwrap();
    /// assert_eq!(maze.shape(), (4, 3));
    /// assert_eq!(maze.lookup(Position::new(2, 1)).unwrap(), '*');
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_grid(rows.into_iter().map(|r| r.as_ref().chars().collect()))
    }

    /// Build a topology from a 2-D character grid.
    pub fn from_grid<I>(grid: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = Vec<char>>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0usize;

        for (i, row) in grid.into_iter().enumerate() {
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(TopologyError::Ragged {
                        row: i,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            cells.extend(row);
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(TopologyError::Empty);
        }
        if rows > Self::MAX_DIM {
            return Err(TopologyError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(TopologyError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }

        Ok(Self {
            cells,
            rows: rows as u32,
            cols: cols as u32,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows as usize, self.cols as usize)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether every coordinate of `position` is within the grid.
    pub fn in_bounds(&self, position: Position) -> bool {
        grid2d::check_2d_bounds(position, self.rows, self.cols).is_ok()
    }

    /// The label at `position`.
    ///
    /// Out-of-bounds positions are an error, never clamped.
    pub fn lookup(&self, position: Position) -> Result<char, TopologyError> {
        let i = self.ravel(position)?;
        Ok(self.cells[i])
    }

    /// Row-major flattened index of `position`.
    pub fn ravel(&self, position: Position) -> Result<usize, TopologyError> {
        let (r, c) = grid2d::check_2d_bounds(position, self.rows, self.cols)?;
        Ok(r * self.cols as usize + c)
    }

    /// Inverse of [`ravel`](Self::ravel). Returns `None` if
    /// `index >= cell_count()`.
    pub fn unravel(&self, index: usize) -> Option<Position> {
        if index >= self.cells.len() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Position::new((index / cols) as i32, (index % cols) as i32))
    }

    /// All positions labelled `label`, in row-major order.
    pub fn positions_with(&self, label: char) -> Vec<Position> {
        self.positions_where(|l| l == label)
    }

    /// All positions not labelled `label`, in row-major order.
    pub fn positions_without(&self, label: char) -> Vec<Position> {
        self.positions_where(|l| l != label)
    }

    fn positions_where(&self, pred: impl Fn(char) -> bool) -> Vec<Position> {
        grid2d::canonical_ordering_2d(self.rows, self.cols)
            .zip(self.cells.iter())
            .filter(|&(_, &l)| pred(l))
            .map(|(p, _)| p)
            .collect()
    }

    /// Whether `position` is in bounds and not a wall.
    pub fn is_open(&self, position: Position) -> bool {
        matches!(self.lookup(position), Ok(l) if l != label::WALL)
    }

    /// In-bounds, non-wall neighbours of `position`, in action order
    /// (north, south, east, west).
    pub fn open_neighbours(&self, position: Position) -> SmallVec<[(Action, Position); 4]> {
        Action::ALL
            .iter()
            .map(|&a| (a, position.offset(a.offset())))
            .filter(|&(_, p)| self.is_open(p))
            .collect()
    }

    /// Every open cell reachable from any of `starts` by 4-connected
    /// moves, in row-major order. Walls and off-grid starts are ignored.
    pub fn reachable_from(&self, starts: &[Position]) -> Vec<Position> {
        let cols = self.cols as usize;
        let mask = grid2d::flood_fill_2d(starts, self.rows, self.cols, |r, c| {
            self.cells[r * cols + c] != label::WALL
        });
        grid2d::canonical_ordering_2d(self.rows, self.cols)
            .zip(mask)
            .filter(|&(_, reached)| reached)
            .map(|(p, _)| p)
            .collect()
    }

    /// The rows of the grid as strings.
    pub fn row_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl FromStr for Topology {
    type Err = TopologyError;

    /// Parse newline-separated rows. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(
            s.lines()
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .filter(|l| !l.is_empty()),
        )
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_strings().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
