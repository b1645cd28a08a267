//! Shared helpers for row-major 2D grids.

use crate::error::TopologyError;
use labyrinth_core::{Action, Position};
use std::collections::VecDeque;

/// Check that a position is in bounds and return `(row, col)` as indices.
pub(crate) fn check_2d_bounds(
    position: Position,
    rows: u32,
    cols: u32,
) -> Result<(usize, usize), TopologyError> {
    let Position { row: r, col: c } = position;
    if r < 0 || r as i64 >= rows as i64 || c < 0 || c as i64 >= cols as i64 {
        return Err(TopologyError::OutOfBounds {
            position,
            rows,
            cols,
        });
    }
    Ok((r as usize, c as usize))
}

/// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
pub(crate) fn canonical_ordering_2d(rows: u32, cols: u32) -> impl Iterator<Item = Position> {
    (0..rows as i32).flat_map(move |r| (0..cols as i32).map(move |c| Position::new(r, c)))
}

/// Breadth-first flood fill over 4-connected cells.
///
/// `passable(r, c)` is only called for in-bounds cells. Start positions
/// that are out of bounds or impassable are skipped. Returns a row-major
/// visited mask.
pub(crate) fn flood_fill_2d(
    starts: &[Position],
    rows: u32,
    cols: u32,
    passable: impl Fn(usize, usize) -> bool,
) -> Vec<bool> {
    let n = (rows as usize) * (cols as usize);
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    let idx = |r: usize, c: usize| r * (cols as usize) + c;

    for &start in starts {
        if let Ok((r, c)) = check_2d_bounds(start, rows, cols) {
            if passable(r, c) && !visited[idx(r, c)] {
                visited[idx(r, c)] = true;
                queue.push_back(start);
            }
        }
    }

    while let Some(p) = queue.pop_front() {
        for action in Action::ALL {
            let Ok((nr, nc)) = check_2d_bounds(p.offset(action.offset()), rows, cols) else {
                continue;
            };
            let i = idx(nr, nc);
            if !visited[i] && passable(nr, nc) {
                visited[i] = true;
                queue.push_back(Position::new(nr as i32, nc as i32));
            }
        }
    }

    visited
}
