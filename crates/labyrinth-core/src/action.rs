//! The fixed action set and move outcome tags.

use std::fmt;

/// Cardinal direction for agent movement.
///
/// The discriminants are the public action indices. Agents address
/// actions by integer, so the order North, South, East, West is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one cell north (row - 1).
    North = 0,
    /// Move one cell south (row + 1).
    South = 1,
    /// Move one cell east (col + 1).
    East = 2,
    /// Move one cell west (col - 1).
    West = 3,
}

impl Action {
    /// Number of actions.
    pub const COUNT: usize = 4;

    /// All actions in index order.
    pub const ALL: [Action; Action::COUNT] =
        [Action::North, Action::South, Action::East, Action::West];

    /// Resolve an action index. Returns `None` if `index >= COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The public index of this action.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the (row_offset, col_offset) for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::North => (-1, 0),
            Action::South => (1, 0),
            Action::East => (0, 1),
            Action::West => (0, -1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::North => "N",
            Action::South => "S",
            Action::East => "E",
            Action::West => "W",
        };
        f.write_str(s)
    }
}

/// What happened to the agent on a single move.
///
/// The string tags double as reward-table keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The agent entered the candidate cell.
    Moved,
    /// The candidate cell was a wall or off the grid; the agent stayed put.
    HitWall,
}

impl Outcome {
    /// Reward-table key for this outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Moved => "moved",
            Outcome::HitWall => "hit-wall",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_order_is_nsew() {
        assert_eq!(Action::from_index(0), Some(Action::North));
        assert_eq!(Action::from_index(1), Some(Action::South));
        assert_eq!(Action::from_index(2), Some(Action::East));
        assert_eq!(Action::from_index(3), Some(Action::West));
        assert_eq!(Action::from_index(4), None);
    }

    #[test]
    fn index_round_trips_through_all() {
        for (i, a) in Action::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }

    #[test]
    fn exactly_one_action_goes_south() {
        let south: Vec<_> = Action::ALL
            .iter()
            .filter(|a| a.offset() == (1, 0))
            .collect();
        assert_eq!(south, vec![&Action::South]);
    }

    #[test]
    fn offsets_are_unit_vectors() {
        for a in Action::ALL {
            let (dr, dc) = a.offset();
            assert_eq!(dr.abs() + dc.abs(), 1, "{a} is not a unit step");
        }
    }

    #[test]
    fn outcome_tags() {
        assert_eq!(Outcome::Moved.as_str(), "moved");
        assert_eq!(Outcome::HitWall.as_str(), "hit-wall");
        assert_eq!(Outcome::HitWall.to_string(), "hit-wall");
    }
}
