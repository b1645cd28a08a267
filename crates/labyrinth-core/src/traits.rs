//! The observation/reward interface consumed by agents.

use crate::action::{Action, Outcome};
use crate::error::EnvError;
use crate::id::StateId;

/// Result of a single [`Environment::perform_action`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    /// Observation after the step. `None` once a non-absorbing episode
    /// has ended.
    pub observation: Option<StateId>,
    /// Reward earned by this step.
    pub reward: f64,
    /// Move outcome, or `None` if the episode had already ended and the
    /// step was a no-op.
    pub outcome: Option<Outcome>,
    /// The action actually executed after slippage. `None` for no-op steps.
    pub action: Option<Action>,
    /// Whether action noise replaced the requested action.
    pub slipped: bool,
}

impl StepResult {
    /// A no-op step from the ended state.
    pub fn noop(observation: Option<StateId>) -> Self {
        Self {
            observation,
            reward: 0.0,
            outcome: None,
            action: None,
            slipped: false,
        }
    }

    /// The `(observation, reward)` pair.
    pub fn pair(&self) -> (Option<StateId>, f64) {
        (self.observation, self.reward)
    }
}

/// A discrete environment with integer states and integer actions.
///
/// Mutating methods take `&mut self`; an environment owns its episode
/// state and random source exclusively.
pub trait Environment {
    /// Number of distinct observations. Every `Some` observation is
    /// strictly below this.
    fn num_states(&self) -> usize;

    /// Number of valid action indices.
    fn num_actions(&self) -> usize;

    /// Start a new episode.
    fn reset(&mut self) -> Result<(), EnvError>;

    /// Current observation without side effects.
    fn observe(&self) -> Option<StateId>;

    /// Apply the action with the given index and advance one step.
    fn perform_action(&mut self, action_index: usize) -> Result<StepResult, EnvError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_pays_nothing() {
        let r = StepResult::noop(Some(StateId(11)));
        assert_eq!(r.pair(), (Some(StateId(11)), 0.0));
        assert!(r.outcome.is_none());
        assert!(r.action.is_none());
        assert!(!r.slipped);
    }
}
