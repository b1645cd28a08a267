//! Benchmark profiles and utilities for the Labyrinth environments.
//!
//! - [`open_room`]: walled rectangle with the origin and goal in opposite corners
//! - [`comb_maze`]: walled grid with alternating wall teeth, forcing a long path
//! - [`reference_profile`]: 100x100 comb maze with noise and step costs
//! - [`random_actions`]: deterministic action stream via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use labyrinth_core::{label, Action, Outcome};
use labyrinth_env::{EnvConfig, RewardTable};
use labyrinth_space::{Topology, TopologyError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `rows x cols` room: a wall border around open floor, origin in the
/// top-left interior corner, goal in the bottom-right one.
///
/// Both dimensions must be at least 3 so an interior exists.
pub fn open_room(rows: usize, cols: usize) -> Result<Topology, TopologyError> {
    let grid = (0..rows).map(|r| {
        (0..cols)
            .map(|c| {
                if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                    label::WALL
                } else if (r, c) == (1, 1) {
                    label::ORIGIN
                } else if (r, c) == (rows - 2, cols - 2) {
                    label::GOAL
                } else {
                    label::OPEN
                }
            })
            .collect::<Vec<char>>()
    });
    Topology::from_grid(grid)
}

/// A room whose interior has a wall on every other column, each with a
/// single gap alternating between the bottom and the top. The shortest
/// path from origin to goal snakes through every column.
pub fn comb_maze(rows: usize, cols: usize) -> Result<Topology, TopologyError> {
    let room = open_room(rows, cols)?;
    let grid = room.row_strings().into_iter().enumerate().map(|(r, line)| {
        line.chars()
            .enumerate()
            .map(|(c, ch)| {
                let tooth = c % 2 == 0 && c > 1 && c + 2 < cols && r > 0 && r + 1 < rows;
                if !tooth {
                    return ch;
                }
                // Gap at the bottom for every fourth column, top otherwise.
                let gap = if c % 4 == 2 { rows - 2 } else { 1 };
                if r == gap {
                    ch
                } else {
                    label::WALL
                }
            })
            .collect::<Vec<char>>()
    });
    Topology::from_grid(grid)
}

/// Build the reference benchmark profile: 100x100 comb maze, 10% slippage,
/// a small step cost and a wall penalty.
pub fn reference_profile(seed: u64) -> Result<(Topology, EnvConfig), TopologyError> {
    let topology = comb_maze(100, 100)?;
    let config = EnvConfig {
        absorbing_end_state: true,
        rewards: RewardTable::default()
            .with_event(Outcome::Moved, -0.01)
            .with_event(Outcome::HitWall, -0.1),
        action_error_prob: 0.1,
        seed,
    };
    Ok((topology, config))
}

/// Generate `n` uniformly random action indices from `seed`.
pub fn random_actions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..Action::COUNT)).collect()
}
