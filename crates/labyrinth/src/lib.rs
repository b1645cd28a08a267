//! Labyrinth: stochastic grid-world environments for reinforcement learning.
//!
//! This is the facade crate that re-exports the public API of the
//! Labyrinth sub-crates. Depending on `labyrinth` alone is enough for
//! most users.
//!
//! # Quick start
//!
//! ```rust
//! use labyrinth::prelude::*;
//!
//! // `o` is the start, `*` the goal, `#` a wall.
//! let maze: Topology = "###\n#o#\n#*#\n###".parse().unwrap();
//! let config = EnvConfig {
//!     rewards: RewardTable::default().with_event(Outcome::HitWall, -1.0),
//!     ..EnvConfig::default()
//! };
//! let mut world = GridWorld::new(maze, config).unwrap();
//!
//! assert_eq!(world.observe(), Some(StateId(4)));
//! let bump = world.perform_action(Action::North.index()).unwrap();
//! assert_eq!(bump.pair(), (Some(StateId(4)), -1.0));
//! assert_eq!(bump.outcome, Some(Outcome::HitWall));
//!
//! let goal = world.perform_action(Action::South.index()).unwrap();
//! assert_eq!(goal.reward, 10.0);
//! assert!(world.is_ended());
//! assert_eq!(world.observe(), None);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `labyrinth-core` | Positions, state IDs, actions, outcomes, the `Environment` trait |
//! | [`space`] | `labyrinth-space` | The immutable `Topology` grid and its text encoding |
//! | [`env`] | `labyrinth-env` | Transitions, rewards, noise, single and batched worlds |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`labyrinth-core`).
///
/// Contains [`types::Position`], [`types::StateId`], the four-way
/// [`types::Action`] set, and the [`types::Environment`] trait.
pub use labyrinth_core as types;

/// Grid topology (`labyrinth-space`).
///
/// [`space::Topology`] parses the text maze format and answers
/// bounds, label, and ravel queries.
pub use labyrinth_space as space;

/// Environments (`labyrinth-env`).
///
/// [`env::GridWorld`] for a single episode stream,
/// [`env::BatchedGridWorld`] for N seeded copies stepped together.
pub use labyrinth_env as env;

/// Common imports for typical Labyrinth usage.
///
/// ```rust
/// use labyrinth::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use labyrinth_core::{Action, Environment, Outcome, Position, StateId, StepResult};

    // Errors
    pub use labyrinth_core::EnvError;
    pub use labyrinth_env::{BatchError, ConfigError};
    pub use labyrinth_space::TopologyError;

    // Space
    pub use labyrinth_space::Topology;

    // Environments
    pub use labyrinth_env::{BatchedGridWorld, EnvConfig, EpisodeMetrics, GridWorld, RewardTable};
}
