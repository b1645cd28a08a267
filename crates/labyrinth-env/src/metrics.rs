//! Per-episode counters for a grid world.

use labyrinth_core::{Outcome, StepResult};

/// Counters for the current episode, plus the number of episodes that
/// reached the goal since construction.
///
/// Reset by [`GridWorld::reset`](crate::GridWorld::reset), except for
/// `episodes_completed`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeMetrics {
    /// Steps that moved or bumped a wall this episode.
    pub steps: u64,
    /// Steps whose outcome was a wall hit.
    pub wall_hits: u64,
    /// Steps where slippage replaced the requested action.
    pub slips: u64,
    /// Steps taken after the episode ended (no-ops).
    pub noop_steps: u64,
    /// Sum of rewards this episode.
    pub episode_return: f64,
    /// Number of episodes that reached the goal.
    pub episodes_completed: u64,
}

impl EpisodeMetrics {
    /// Clear the per-episode counters.
    pub(crate) fn begin_episode(&mut self) {
        *self = Self {
            episodes_completed: self.episodes_completed,
            ..Self::default()
        };
    }

    pub(crate) fn record(&mut self, step: &StepResult, ended: bool) {
        match step.outcome {
            None => {
                self.noop_steps += 1;
                return;
            }
            Some(Outcome::HitWall) => self.wall_hits += 1,
            Some(Outcome::Moved) => {}
        }
        self.steps += 1;
        if step.slipped {
            self.slips += 1;
        }
        self.episode_return += step.reward;
        if ended {
            self.episodes_completed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{Action, StateId};

    fn step(outcome: Outcome, reward: f64, slipped: bool) -> StepResult {
        StepResult {
            observation: Some(StateId(0)),
            reward,
            outcome: Some(outcome),
            action: Some(Action::North),
            slipped,
        }
    }

    #[test]
    fn default_metrics_are_zero() {
        let m = EpisodeMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.wall_hits, 0);
        assert_eq!(m.slips, 0);
        assert_eq!(m.noop_steps, 0);
        assert_eq!(m.episode_return, 0.0);
        assert_eq!(m.episodes_completed, 0);
    }

    #[test]
    fn record_accumulates() {
        let mut m = EpisodeMetrics::default();
        m.record(&step(Outcome::HitWall, -1.0, false), false);
        m.record(&step(Outcome::Moved, 0.0, true), false);
        m.record(&step(Outcome::Moved, 10.0, false), true);
        m.record(&StepResult::noop(None), false);
        assert_eq!(m.steps, 3);
        assert_eq!(m.wall_hits, 1);
        assert_eq!(m.slips, 1);
        assert_eq!(m.noop_steps, 1);
        assert_eq!(m.episode_return, 9.0);
        assert_eq!(m.episodes_completed, 1);
    }

    #[test]
    fn begin_episode_keeps_completed_count() {
        let mut m = EpisodeMetrics::default();
        m.record(&step(Outcome::Moved, 10.0, false), true);
        m.begin_episode();
        assert_eq!(m.steps, 0);
        assert_eq!(m.episode_return, 0.0);
        assert_eq!(m.episodes_completed, 1);
    }
}
