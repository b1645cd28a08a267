//! Runtime error types for environment operations.

use std::error::Error;
use std::fmt;

/// Errors from `reset()` and `perform_action()`.
///
/// Every variant is a deterministic precondition failure; none are
/// transient and none are retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvError {
    /// The action index is outside `[0, num_actions)`.
    InvalidAction {
        /// The rejected index.
        index: usize,
        /// Number of valid actions.
        num_actions: usize,
    },
    /// The topology has no origin cell, so no start position can be sampled.
    NoOrigin,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { index, num_actions } => {
                write!(f, "action index {index} out of range [0, {num_actions})")
            }
            Self::NoOrigin => write!(f, "invalid topology: no origin cell to start from"),
        }
    }
}

impl Error for EnvError {}
