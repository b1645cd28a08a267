//! Core types and traits for the Labyrinth grid-world environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Labyrinth workspace:
//! positions and state IDs, the fixed action set, move outcomes, cell
//! labels, error types, and the [`Environment`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod error;
pub mod id;
pub mod label;
pub mod traits;

pub use action::{Action, Outcome};
pub use error::EnvError;
pub use id::{Position, StateId};
pub use traits::{Environment, StepResult};
