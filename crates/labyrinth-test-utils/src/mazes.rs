//! Standard maze fixtures.
//!
//! Key: `#` wall, `*` goal, `o` origin, anything else open.

/// One origin directly north of the goal; every other move hits a wall.
/// 4x3, so 12 cells.
pub const CORRIDOR: &[&str] = &["###", "#o#", "#*#", "###"];

/// Wall-free 3x3 room: the grid edge is the only boundary.
pub const OPEN_ROOM: &[&str] = &["o..", "...", "..*"];

/// Two rooms joined by a doorway (`+`, which is just open floor). Two
/// origins in the west room, goal in the east room. 5x7.
pub const TWO_ROOMS: &[&str] = &[
    "#######",
    "#o.#..#",
    "#..+.*#",
    "#o.#..#",
    "#######",
];

/// The goal is walled off from the only origin.
pub const UNREACHABLE_GOAL: &[&str] = &["o#*"];

/// No start cell at all.
pub const NO_ORIGIN: &[&str] = &["..*"];

/// A 1x3 strip with origins on both ends and no goal.
pub const TWIN_ORIGINS: &[&str] = &["o.o"];
