//! Action slippage.
//!
//! With probability `p` the requested action is replaced by a uniform
//! draw over all actions, so it survives with probability
//! `1 - p + p / Action::COUNT`. The draw happens independently on every
//! step; with `p == 0` no random numbers are consumed at all, which keeps
//! deterministic runs insensitive to the generator.

use labyrinth_core::Action;
use rand::Rng;

/// Slippage model applied before each move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionNoise {
    prob: f64,
}

impl ActionNoise {
    /// No slippage.
    pub const NONE: ActionNoise = ActionNoise { prob: 0.0 };

    /// Create a slippage model. Returns `Err` unless `prob` is finite and
    /// within `[0, 1]`.
    pub fn new(prob: f64) -> Result<Self, String> {
        if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
            return Err(format!(
                "action_error_prob must be finite and in [0, 1], got {prob}"
            ));
        }
        Ok(Self { prob })
    }

    /// The substitution probability.
    pub fn prob(&self) -> f64 {
        self.prob
    }

    /// Resolve the action to execute.
    ///
    /// Returns `(executed, slipped)`. `slipped` means the substitution
    /// fired; the uniformly drawn substitute may still equal `requested`.
    pub fn apply<R: Rng>(&self, requested: Action, rng: &mut R) -> (Action, bool) {
        if self.prob > 0.0 && rng.random::<f64>() < self.prob {
            let substitute = Action::ALL[rng.random_range(0..Action::COUNT)];
            return (substitute, true);
        }
        (requested, false)
    }
}

impl Default for ActionNoise {
    fn default() -> Self {
        Self::NONE
    }
}
