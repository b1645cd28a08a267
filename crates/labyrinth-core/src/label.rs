//! Cell labels with special meaning in a topology description.
//!
//! Any character not listed here is open, traversable floor.

/// Impassable cell.
pub const WALL: char = '#';

/// Goal cell. Entering it ends the episode.
pub const GOAL: char = '*';

/// Start cell. `reset` samples uniformly among all of them.
pub const ORIGIN: char = 'o';

/// Conventional open floor, used when rendering.
pub const OPEN: char = '.';

/// Drawn over the agent's cell by renderers. Never part of a topology's
/// semantics.
pub const AGENT: char = 'A';
