//! Labelled grid topologies for Labyrinth mazes.
//!
//! A [`Topology`] is an immutable rectangular grid of single-character
//! cell labels. It answers bounds, lookup, and label-search queries and
//! knows nothing about agents, rewards, or episodes.
//!
//! # Text encoding
//!
//! - `#`: wall
//! - `*`: goal
//! - `o`: origin (start cell)
//! - anything else: open floor

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub(crate) mod grid2d;
pub mod topology;

pub use error::TopologyError;
pub use topology::Topology;
