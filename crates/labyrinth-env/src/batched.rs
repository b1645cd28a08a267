//! Batched grid worlds for vectorized rollouts.
//!
//! [`BatchedGridWorld`] owns N [`GridWorld`]s over the same topology and
//! steps them all in a single call. World `i` is seeded with
//! `base_seed + i`, so the worlds draw uncorrelated noise and starts while
//! the whole batch stays reproducible from one seed.

use labyrinth_core::{EnvError, StateId, StepResult};
use labyrinth_space::Topology;

use crate::config::{ConfigError, EnvConfig};
use crate::world::GridWorld;

// ── Error type ──────────────────────────────────────────────────

/// Error from a batched operation, annotated with the failing world index.
#[derive(Debug, PartialEq)]
pub enum BatchError {
    /// A world rejected its step or reset.
    Step {
        /// Index of the world that failed (0-based).
        world_index: usize,
        /// The underlying environment error.
        error: EnvError,
    },
    /// Configuration error during construction.
    Config(ConfigError),
    /// World index out of bounds.
    InvalidIndex {
        /// The requested index.
        world_index: usize,
        /// Total number of worlds.
        num_worlds: usize,
    },
    /// Batch-level argument validation failed.
    InvalidArgument {
        /// Human-readable description of what's wrong.
        reason: String,
    },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Step { world_index, error } => {
                write!(f, "world {world_index}: {error}")
            }
            BatchError::Config(e) => write!(f, "config error: {e}"),
            BatchError::InvalidIndex {
                world_index,
                num_worlds,
            } => write!(
                f,
                "world index {world_index} out of range (num_worlds={num_worlds})"
            ),
            BatchError::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Step { error, .. } => Some(error),
            BatchError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for BatchError {
    fn from(e: ConfigError) -> Self {
        BatchError::Config(e)
    }
}

// ── BatchedGridWorld ────────────────────────────────────────────

/// N independently seeded grid worlds sharing one topology and config.
pub struct BatchedGridWorld {
    worlds: Vec<GridWorld>,
    base_seed: u64,
}

impl BatchedGridWorld {
    /// Create `num_worlds` worlds. World `i` uses `config` with
    /// `seed = config.seed + i` (wrapping).
    ///
    /// # Errors
    ///
    /// [`BatchError::InvalidArgument`] if `num_worlds == 0`, or
    /// [`BatchError::Config`] if the config is invalid for `topology`.
    pub fn new(
        topology: &Topology,
        config: &EnvConfig,
        num_worlds: usize,
    ) -> Result<Self, BatchError> {
        if num_worlds == 0 {
            return Err(BatchError::InvalidArgument {
                reason: "BatchedGridWorld requires at least one world".into(),
            });
        }
        config.validate(topology)?;

        let mut worlds = Vec::with_capacity(num_worlds);
        for i in 0..num_worlds {
            let cfg = EnvConfig {
                seed: Self::world_seed(config.seed, i),
                ..config.clone()
            };
            worlds.push(GridWorld::new(topology.clone(), cfg)?);
        }
        tracing::debug!(num_worlds, base_seed = config.seed, "batched worlds created");
        Ok(Self {
            worlds,
            base_seed: config.seed,
        })
    }

    fn world_seed(base: u64, index: usize) -> u64 {
        base.wrapping_add(index as u64)
    }

    /// Step every world with its own action index.
    ///
    /// All indices are validated before any world steps, so an error
    /// leaves the whole batch untouched.
    pub fn step_all(&mut self, actions: &[usize]) -> Result<Vec<StepResult>, BatchError> {
        if actions.len() != self.worlds.len() {
            return Err(BatchError::InvalidArgument {
                reason: format!(
                    "expected {} actions, got {}",
                    self.worlds.len(),
                    actions.len()
                ),
            });
        }
        if let Some((world_index, &index)) = actions
            .iter()
            .enumerate()
            .find(|&(_, &a)| a >= labyrinth_core::Action::COUNT)
        {
            return Err(BatchError::Step {
                world_index,
                error: EnvError::InvalidAction {
                    index,
                    num_actions: labyrinth_core::Action::COUNT,
                },
            });
        }

        self.worlds
            .iter_mut()
            .zip(actions)
            .enumerate()
            .map(|(world_index, (w, &a))| {
                w.perform_action(a)
                    .map_err(|error| BatchError::Step { world_index, error })
            })
            .collect()
    }

    /// Observation of every world.
    pub fn observe_all(&self) -> Vec<Option<StateId>> {
        self.worlds.iter().map(|w| w.observe()).collect()
    }

    /// Start a new episode in one world, leaving the others alone.
    pub fn reset_world(&mut self, world_index: usize) -> Result<(), BatchError> {
        let num_worlds = self.worlds.len();
        let world = self
            .worlds
            .get_mut(world_index)
            .ok_or(BatchError::InvalidIndex {
                world_index,
                num_worlds,
            })?;
        world
            .reset()
            .map_err(|error| BatchError::Step { world_index, error })
    }

    /// Start a new episode in every world.
    pub fn reset_all(&mut self) -> Result<(), BatchError> {
        for world_index in 0..self.worlds.len() {
            self.reset_world(world_index)?;
        }
        Ok(())
    }

    /// Reset only the worlds whose episode has ended. Returns how many
    /// were reset.
    pub fn reset_ended(&mut self) -> Result<usize, BatchError> {
        let mut n = 0;
        for world_index in 0..self.worlds.len() {
            if self.worlds[world_index].is_ended() {
                self.reset_world(world_index)?;
                n += 1;
            }
        }
        Ok(n)
    }

    /// Number of worlds.
    pub fn num_worlds(&self) -> usize {
        self.worlds.len()
    }

    /// Seed of world 0; world `i` uses `base_seed + i`.
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Borrow one world.
    pub fn world(&self, world_index: usize) -> Option<&GridWorld> {
        self.worlds.get(world_index)
    }

    /// Whether every world's episode has ended.
    pub fn all_ended(&self) -> bool {
        self.worlds.iter().all(|w| w.is_ended())
    }
}

impl std::fmt::Debug for BatchedGridWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchedGridWorld")
            .field("num_worlds", &self.worlds.len())
            .field("base_seed", &self.base_seed)
            .field("ended", &self.worlds.iter().filter(|w| w.is_ended()).count())
            .finish()
    }
}
