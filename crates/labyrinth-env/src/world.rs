//! Single-episode grid world.
//!
//! [`GridWorld`] is the primary user-facing API. Each
//! [`perform_action()`](GridWorld::perform_action) call slips the action
//! (if configured), runs the [`try_move`] transition, pays the summed
//! content and event reward, and ends the episode on the goal.
//!
//! # Ownership model
//!
//! A `GridWorld` owns its topology, episode state, and random source
//! exclusively. All mutating methods take `&mut self`; nothing is shared
//! between instances, so independent worlds can run side by side with
//! independent seeds.

use labyrinth_core::{label, Action, EnvError, Environment, Position, StateId, StepResult};
use labyrinth_space::Topology;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, EnvConfig};
use crate::metrics::EpisodeMetrics;
use crate::noise::ActionNoise;
use crate::transition::try_move;

// ── EpisodeState ────────────────────────────────────────────────

/// Where the agent is, or that the episode is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodeState {
    /// The agent stands on this in-bounds, non-goal cell.
    At(Position),
    /// The goal was reached. Only [`GridWorld::reset`] leaves this state.
    Ended,
}

// ── GridWorld ───────────────────────────────────────────────────

/// A maze task: start on a random origin, reach the goal.
///
/// Created from a [`Topology`] and an [`EnvConfig`] via
/// [`new()`](GridWorld::new), which seeds a [`ChaCha8Rng`] from
/// `config.seed`, or via [`with_rng()`](GridWorld::with_rng) with any
/// caller-supplied generator. Construction performs the first reset.
///
/// # Example
///
/// ```
/// use labyrinth_core::{Action, StateId};
/// use labyrinth_env::{EnvConfig, GridWorld};
/// use labyrinth_space::Topology;
///
/// let maze = Topology::from_rows(["###", "#o#", "#*#", "###"]).unwrap();
/// let mut world = GridWorld::new(maze, EnvConfig::default()).unwrap();
/// assert_eq!(world.observe(), Some(StateId(4)));
///
/// let step = world.perform(Action::South);
/// assert_eq!(step.reward, 10.0);
/// assert_eq!(step.observation, None);
/// ```
#[derive(Debug)]
pub struct GridWorld<R = ChaCha8Rng> {
    topology: Topology,
    config: EnvConfig,
    noise: ActionNoise,
    origins: Vec<Position>,
    rng: R,
    state: EpisodeState,
    metrics: EpisodeMetrics,
}

impl GridWorld<ChaCha8Rng> {
    /// Create a world whose random source is seeded from `config.seed`.
    pub fn new(topology: Topology, config: EnvConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(topology, config, rng)
    }

    /// Replace the random source with a fresh one seeded from `seed`,
    /// then start a new episode.
    pub fn reseed(&mut self, seed: u64) -> Result<(), EnvError> {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.reset()
    }
}

impl<R: Rng> GridWorld<R> {
    /// Create a world drawing from `rng`.
    ///
    /// Validates `config` against `topology` and performs the first reset.
    pub fn with_rng(topology: Topology, config: EnvConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate(&topology)?;
        let noise = config.noise()?;
        let origins = topology.positions_with(label::ORIGIN);
        let mut world = Self {
            topology,
            config,
            noise,
            origins,
            rng,
            state: EpisodeState::Ended,
            metrics: EpisodeMetrics::default(),
        };
        world.reset()?;
        Ok(world)
    }

    /// Start a new episode on a uniformly random origin cell.
    ///
    /// # Errors
    ///
    /// [`EnvError::NoOrigin`] if the topology has no origin cell.
    pub fn reset(&mut self) -> Result<(), EnvError> {
        if self.origins.is_empty() {
            return Err(EnvError::NoOrigin);
        }
        let start = self.origins[self.rng.random_range(0..self.origins.len())];
        self.state = EpisodeState::At(start);
        self.metrics.begin_episode();
        tracing::debug!(%start, "episode reset");
        Ok(())
    }

    /// Current observation: the row-major index of the agent's cell.
    ///
    /// After the goal is reached this is `num_states() - 1` when the end
    /// state is absorbing, and `None` otherwise.
    pub fn observe(&self) -> Option<StateId> {
        match self.state {
            EpisodeState::At(p) => self.topology.ravel(p).ok().map(StateId),
            EpisodeState::Ended if self.config.absorbing_end_state => {
                Some(StateId(self.num_states() - 1))
            }
            EpisodeState::Ended => None,
        }
    }

    /// Perform the action with the given index.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidAction`] if `action_index >= num_actions()`.
    /// The index is checked even when the episode has ended.
    pub fn perform_action(&mut self, action_index: usize) -> Result<StepResult, EnvError> {
        let action = Action::from_index(action_index).ok_or(EnvError::InvalidAction {
            index: action_index,
            num_actions: Action::COUNT,
        })?;
        Ok(self.perform(action))
    }

    /// Perform `requested` and advance one step.
    ///
    /// Once the episode has ended every call is a zero-reward no-op.
    pub fn perform(&mut self, requested: Action) -> StepResult {
        let EpisodeState::At(position) = self.state else {
            let result = StepResult::noop(self.observe());
            self.metrics.record(&result, false);
            return result;
        };

        let (action, slipped) = self.noise.apply(requested, &mut self.rng);
        let (new_position, outcome) = try_move(&self.topology, position, action.offset());

        // `new_position` is always in bounds: either the old cell or an
        // accepted candidate.
        let cell = self.topology.lookup(new_position).ok();
        let content = cell.map_or(0.0, |l| self.config.rewards.content_reward(l));
        let reward = content + self.config.rewards.event_reward(outcome);

        self.state = EpisodeState::At(new_position);
        let reached_goal = cell == Some(label::GOAL);
        if reached_goal {
            self.state = EpisodeState::Ended;
        }

        let result = StepResult {
            observation: self.observe(),
            reward,
            outcome: Some(outcome),
            action: Some(action),
            slipped,
        };
        self.metrics.record(&result, reached_goal);

        tracing::trace!(
            %requested,
            %action,
            slipped,
            %outcome,
            reward,
            "step"
        );
        if reached_goal {
            tracing::debug!(
                steps = self.metrics.steps,
                episode_return = self.metrics.episode_return,
                "episode ended at goal"
            );
        }
        result
    }

    /// Number of observations: one per cell, plus one if absorbing.
    pub fn num_states(&self) -> usize {
        self.topology.cell_count() + usize::from(self.config.absorbing_end_state)
    }

    /// Number of actions (always 4: N, S, E, W).
    pub fn num_actions(&self) -> usize {
        Action::COUNT
    }

    /// The episode state.
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    /// The agent's cell, or `None` after the episode ended.
    pub fn position(&self) -> Option<Position> {
        match self.state {
            EpisodeState::At(p) => Some(p),
            EpisodeState::Ended => None,
        }
    }

    /// Whether the episode has ended.
    pub fn is_ended(&self) -> bool {
        self.state == EpisodeState::Ended
    }

    /// The maze.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The configuration this world was built with.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Counters for the current episode.
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// The maze as text with the agent drawn as `A`.
    pub fn render(&self) -> String {
        let mut rows = self.topology.row_strings();
        if let EpisodeState::At(p) = self.state {
            if let Some(row) = rows.get_mut(p.row as usize) {
                *row = row
                    .chars()
                    .enumerate()
                    .map(|(c, ch)| if c == p.col as usize { label::AGENT } else { ch })
                    .collect();
            }
        }
        rows.join("\n")
    }
}

impl<R: Rng> Environment for GridWorld<R> {
    fn num_states(&self) -> usize {
        GridWorld::num_states(self)
    }

    fn num_actions(&self) -> usize {
        GridWorld::num_actions(self)
    }

    fn reset(&mut self) -> Result<(), EnvError> {
        GridWorld::reset(self)
    }

    fn observe(&self) -> Option<StateId> {
        GridWorld::observe(self)
    }

    fn perform_action(&mut self, action_index: usize) -> Result<StepResult, EnvError> {
        GridWorld::perform_action(self, action_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardTable;
    use labyrinth_core::Outcome;
    use labyrinth_test_utils::{mazes, topology};

    fn corridor(absorbing: bool) -> GridWorld {
        let cfg = EnvConfig {
            absorbing_end_state: absorbing,
            ..EnvConfig::default()
        };
        GridWorld::new(topology(mazes::CORRIDOR), cfg).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn construction_resets_to_origin() {
        let w = corridor(false);
        assert_eq!(w.position(), Some(Position::new(1, 1)));
        assert_eq!(w.observe(), Some(StateId(4)));
        assert_eq!(w.num_actions(), 4);
    }

    #[test]
    fn num_states_counts_absorbing_state() {
        assert_eq!(corridor(false).num_states(), 12);
        assert_eq!(corridor(true).num_states(), 13);
    }

    #[test]
    fn no_origin_fails_construction() {
        match GridWorld::new(topology(mazes::NO_ORIGIN), EnvConfig::default()) {
            Err(ConfigError::NoOrigin) => {}
            other => panic!("expected NoOrigin, got {other:?}"),
        }
    }

    #[test]
    fn invalid_prob_fails_construction() {
        let cfg = EnvConfig {
            action_error_prob: 2.0,
            ..EnvConfig::default()
        };
        assert!(matches!(
            GridWorld::new(topology(mazes::CORRIDOR), cfg),
            Err(ConfigError::InvalidActionErrorProb { .. })
        ));
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn south_reaches_goal_and_ends() {
        let mut w = corridor(false);
        let r = w.perform_action(Action::South.index()).unwrap();
        assert_eq!(r.pair(), (None, 10.0));
        assert_eq!(r.outcome, Some(Outcome::Moved));
        assert!(w.is_ended());
        assert_eq!(w.observe(), None);
    }

    #[test]
    fn blocked_moves_keep_start() {
        for a in [Action::North, Action::East, Action::West] {
            let mut w = corridor(false);
            let r = w.perform(a);
            assert_eq!(r.pair(), (Some(StateId(4)), 0.0), "{a}");
            assert_eq!(r.outcome, Some(Outcome::HitWall));
            assert!(!w.is_ended());
        }
    }

    #[test]
    fn absorbing_end_state_is_a_sink() {
        let mut w = corridor(true);
        let r = w.perform(Action::South);
        assert_eq!(r.pair(), (Some(StateId(12)), 10.0));
        for a in Action::ALL {
            let r = w.perform(a);
            assert_eq!(r.pair(), (Some(StateId(12)), 0.0));
            assert!(r.outcome.is_none());
        }
    }

    #[test]
    fn non_absorbing_end_returns_none() {
        let mut w = corridor(false);
        w.perform(Action::South);
        for i in 0..4 {
            assert_eq!(w.perform_action(i).unwrap().pair(), (None, 0.0));
        }
    }

    #[test]
    fn reset_leaves_ended_state() {
        let mut w = corridor(false);
        w.perform(Action::South);
        w.reset().unwrap();
        assert_eq!(w.state(), EpisodeState::At(Position::new(1, 1)));
        assert_eq!(w.observe(), Some(StateId(4)));
    }

    #[test]
    fn invalid_action_index_rejected() {
        let mut w = corridor(false);
        assert_eq!(
            w.perform_action(4),
            Err(EnvError::InvalidAction {
                index: 4,
                num_actions: 4
            })
        );
        // Still rejected after the episode ends.
        w.perform(Action::South);
        assert!(w.perform_action(usize::MAX).is_err());
    }

    #[test]
    fn event_rewards_stack_with_content() {
        let cfg = EnvConfig {
            rewards: RewardTable::default()
                .with_event(Outcome::Moved, -1.0)
                .with_event(Outcome::HitWall, -3.0),
            ..EnvConfig::default()
        };
        let mut w = GridWorld::new(topology(mazes::CORRIDOR), cfg.clone()).unwrap();
        assert_eq!(w.perform(Action::North).reward, -3.0);
        assert_eq!(w.perform(Action::South).reward, 9.0);
    }

    #[test]
    fn origin_label_reward_paid_on_bump() {
        // Staying on the origin after a wall hit still pays the origin's
        // content reward.
        let cfg = EnvConfig {
            rewards: RewardTable::new().with_label('o', 0.5),
            ..EnvConfig::default()
        };
        let mut w = GridWorld::new(topology(mazes::CORRIDOR), cfg).unwrap();
        assert_eq!(w.perform(Action::West).reward, 0.5);
    }

    #[test]
    fn zero_noise_is_deterministic() {
        let mut a = GridWorld::new(topology(mazes::OPEN_ROOM), EnvConfig::default()).unwrap();
        let path = [Action::East, Action::South, Action::East, Action::North];
        let first: Vec<_> = path.iter().map(|&x| a.perform(x).pair()).collect();
        a.reset().unwrap();
        let second: Vec<_> = path.iter().map(|&x| a.perform(x).pair()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn same_seed_same_trajectory_under_noise() {
        let cfg = EnvConfig {
            action_error_prob: 0.5,
            seed: 1234,
            ..EnvConfig::default()
        };
        let mut a = GridWorld::new(topology(mazes::TWO_ROOMS), cfg.clone()).unwrap();
        let mut b = GridWorld::new(topology(mazes::TWO_ROOMS), cfg).unwrap();
        for i in 0..200 {
            let act = Action::ALL[i % 4];
            assert_eq!(a.perform(act), b.perform(act));
        }
    }

    #[test]
    fn reseed_replays_the_episode() {
        let cfg = EnvConfig {
            action_error_prob: 0.3,
            seed: 5,
            ..EnvConfig::default()
        };
        let mut w = GridWorld::new(topology(mazes::TWO_ROOMS), cfg).unwrap();
        let run = |w: &mut GridWorld| -> Vec<StepResult> {
            (0..50).map(|i| w.perform(Action::ALL[i % 4])).collect()
        };
        w.reseed(77).unwrap();
        let first = run(&mut w);
        w.reseed(77).unwrap();
        assert_eq!(run(&mut w), first);
        assert_eq!(w.config().seed, 77);
    }

    #[test]
    fn reset_samples_every_origin() {
        let mut w = GridWorld::new(topology(mazes::TWIN_ORIGINS), EnvConfig::default()).unwrap();
        let mut seen = [false; 2];
        for _ in 0..100 {
            w.reset().unwrap();
            match w.position() {
                Some(Position { row: 0, col: 0 }) => seen[0] = true,
                Some(Position { row: 0, col: 2 }) => seen[1] = true,
                other => panic!("reset to non-origin {other:?}"),
            }
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn metrics_track_episode() {
        let cfg = EnvConfig {
            rewards: RewardTable::default().with_event(Outcome::HitWall, -1.0),
            ..EnvConfig::default()
        };
        let mut w = GridWorld::new(topology(mazes::CORRIDOR), cfg).unwrap();
        w.perform(Action::North);
        w.perform(Action::East);
        w.perform(Action::South);
        w.perform(Action::South);
        let m = w.metrics();
        assert_eq!(m.steps, 3);
        assert_eq!(m.wall_hits, 2);
        assert_eq!(m.noop_steps, 1);
        assert_eq!(m.episode_return, 8.0);
        assert_eq!(m.episodes_completed, 1);
        w.reset().unwrap();
        assert_eq!(w.metrics().steps, 0);
        assert_eq!(w.metrics().episodes_completed, 1);
    }

    #[test]
    fn render_draws_agent() {
        let mut w = corridor(false);
        assert_eq!(w.render(), "###\n#A#\n#*#\n###");
        w.perform(Action::South);
        assert_eq!(w.render(), "###\n#o#\n#*#\n###");
    }

    #[test]
    fn environment_trait_object() {
        let mut w = corridor(true);
        let env: &mut dyn Environment = &mut w;
        assert_eq!(env.num_states(), 13);
        assert_eq!(env.num_actions(), 4);
        assert_eq!(env.observe(), Some(StateId(4)));
        let r = env.perform_action(1).unwrap();
        assert_eq!(r.observation, Some(StateId(12)));
        env.reset().unwrap();
        assert_eq!(env.observe(), Some(StateId(4)));
    }

    #[test]
    fn custom_rng_is_accepted() {
        let rng = rand::rngs::StdRng::seed_from_u64(3);
        let w = GridWorld::with_rng(topology(mazes::CORRIDOR), EnvConfig::default(), rng).unwrap();
        assert_eq!(w.observe(), Some(StateId(4)));
    }
}
