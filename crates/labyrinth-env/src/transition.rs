//! The pure geometric step.

use labyrinth_core::{label, Outcome, Position};
use labyrinth_space::Topology;

/// Move from `position` by `offset`, treating walls and the grid edge alike.
///
/// If `position + offset` is off the grid or lands on a wall, the move is
/// rejected and the agent stays put: `(position, Outcome::HitWall)`.
/// Otherwise the agent enters the candidate cell:
/// `(position + offset, Outcome::Moved)`.
///
/// Knows nothing about rewards or episodes.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Action, Outcome, Position};
/// use labyrinth_env::try_move;
/// use labyrinth_space::Topology;
///
/// let maze = Topology::from_rows(["###", "#o#", "#*#", "###"]).unwrap();
/// let start = Position::new(1, 1);
/// assert_eq!(
///     try_move(&maze, start, Action::South.offset()),
///     (Position::new(2, 1), Outcome::Moved)
/// );
/// assert_eq!(
///     try_move(&maze, start, Action::North.offset()),
///     (start, Outcome::HitWall)
/// );
/// ```
pub fn try_move(topology: &Topology, position: Position, offset: (i32, i32)) -> (Position, Outcome) {
    let candidate = position.offset(offset);
    match topology.lookup(candidate) {
        Ok(l) if l != label::WALL => (candidate, Outcome::Moved),
        _ => (position, Outcome::HitWall),
    }
}
