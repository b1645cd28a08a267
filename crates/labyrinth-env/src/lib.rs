//! Stochastic grid-world environment for reinforcement learning.
//!
//! [`GridWorld`] owns an immutable [`Topology`](labyrinth_space::Topology),
//! a seeded random source, and the episode state. Each
//! [`perform_action`](GridWorld::perform_action) call optionally slips
//! the requested action, runs the pure [`try_move`] transition, and pays
//! the sum of the content reward and the event reward.
//!
//! [`BatchedGridWorld`] runs N independently seeded worlds over the same
//! topology for vectorized rollouts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batched;
pub mod config;
pub mod metrics;
pub mod noise;
pub mod reward;
pub mod transition;
pub mod world;

pub use batched::{BatchError, BatchedGridWorld};
pub use config::{ConfigError, EnvConfig};
pub use metrics::EpisodeMetrics;
pub use noise::ActionNoise;
pub use reward::RewardTable;
pub use transition::try_move;
pub use world::{EpisodeState, GridWorld};
