//! Test fixtures and statistical helpers for Labyrinth development.
//!
//! - [`mazes`]: standard topology descriptions.
//! - [`stats`]: binomial acceptance intervals for stochastic tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mazes;
pub mod stats;

use labyrinth_space::Topology;

/// Parse a fixture, panicking on malformed input.
pub fn topology(rows: &[&str]) -> Topology {
    Topology::from_rows(rows).expect("fixture maze must be rectangular and non-empty")
}
