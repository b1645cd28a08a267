//! Environment configuration, validation, and error types.
//!
//! [`EnvConfig`] is the builder-input for constructing a [`GridWorld`](crate::GridWorld).
//! [`validate()`](EnvConfig::validate) checks it against a topology at
//! construction time so that no later call can fail for configuration
//! reasons.

use std::error::Error;
use std::fmt;

use labyrinth_core::{label, EnvError};
use labyrinth_space::{Topology, TopologyError};

use crate::noise::ActionNoise;
use crate::reward::RewardTable;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnvConfig::validate()`] or world construction.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The topology description could not be parsed.
    Topology(TopologyError),
    /// `action_error_prob` is NaN, infinite, or outside `[0, 1]`.
    InvalidActionErrorProb {
        /// The invalid value.
        value: f64,
    },
    /// A reward value is NaN or infinite.
    NonFiniteReward {
        /// The reward-table key.
        key: String,
        /// The invalid value.
        value: f64,
    },
    /// The topology has no origin cell.
    NoOrigin,
    /// The initial reset failed.
    Reset(EnvError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topology(e) => write!(f, "topology: {e}"),
            Self::InvalidActionErrorProb { value } => {
                write!(f, "action_error_prob must be finite and in [0, 1], got {value}")
            }
            Self::NonFiniteReward { key, value } => {
                write!(f, "reward for '{key}' must be finite, got {value}")
            }
            Self::NoOrigin => write!(
                f,
                "invalid topology: no origin cell ('{}')",
                label::ORIGIN
            ),
            Self::Reset(e) => write!(f, "initial reset failed: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Topology(e) => Some(e),
            Self::Reset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TopologyError> for ConfigError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

impl From<EnvError> for ConfigError {
    fn from(e: EnvError) -> Self {
        Self::Reset(e)
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a grid world.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvConfig {
    /// After reaching the goal, report a synthetic absorbing state with
    /// the maximal index instead of no observation. Default: false.
    pub absorbing_end_state: bool,
    /// Content and event rewards. Default: `{"*": 10}`.
    pub rewards: RewardTable,
    /// Probability that the requested action is replaced by a uniformly
    /// random one. Default: 0 (deterministic).
    pub action_error_prob: f64,
    /// Seed for the world's random source. Default: 0.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            absorbing_end_state: false,
            rewards: RewardTable::default(),
            action_error_prob: 0.0,
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// Validate all structural invariants against `topology`.
    ///
    /// A goal that no origin can reach is allowed but logged at `warn`.
    pub fn validate(&self, topology: &Topology) -> Result<(), ConfigError> {
        // 1. Slippage probability in [0, 1].
        self.noise()?;
        // 2. Every reward finite.
        for (key, value) in self.rewards.iter() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteReward {
                    key: key.to_string(),
                    value,
                });
            }
        }
        // 3. At least one origin.
        let origins = topology.positions_with(label::ORIGIN);
        if origins.is_empty() {
            return Err(ConfigError::NoOrigin);
        }
        // 4. Goal reachability is advisory only.
        let goals = topology.positions_with(label::GOAL);
        if !goals.is_empty() {
            let reachable = topology.reachable_from(&origins);
            if !goals.iter().any(|g| reachable.contains(g)) {
                tracing::warn!(
                    goals = goals.len(),
                    origins = origins.len(),
                    "no goal cell is reachable from any origin"
                );
            }
        }
        Ok(())
    }

    /// The slippage model described by `action_error_prob`.
    pub fn noise(&self) -> Result<ActionNoise, ConfigError> {
        ActionNoise::new(self.action_error_prob).map_err(|_| ConfigError::InvalidActionErrorProb {
            value: self.action_error_prob,
        })
    }
}
