//! Reward table keyed by cell label or move outcome.
//!
//! Cell labels and outcome tags (`"moved"`, `"hit-wall"`) share one string
//! namespace. A step pays the content reward of the cell it ends on plus
//! the event reward of its outcome; missing keys contribute zero.

use indexmap::IndexMap;
use labyrinth_core::{label, Outcome};

/// Mapping from label or event tag to reward.
///
/// Insertion-ordered so that iteration and `Debug` output are stable.
/// The default pays `10.0` for entering the goal and nothing else.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardTable {
    entries: IndexMap<String, f64>,
}

impl RewardTable {
    /// An empty table: every step pays zero.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add or replace the reward for an arbitrary key.
    pub fn with(mut self, key: impl Into<String>, reward: f64) -> Self {
        self.insert(key, reward);
        self
    }

    /// Add or replace the reward for ending a step on a cell with `label`.
    pub fn with_label(self, label: char, reward: f64) -> Self {
        self.with(label, reward)
    }

    /// Add or replace the reward for a move outcome.
    pub fn with_event(self, outcome: Outcome, reward: f64) -> Self {
        self.with(outcome.as_str(), reward)
    }

    /// Add or replace a reward in place. Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, reward: f64) -> Option<f64> {
        self.entries.insert(key.into(), reward)
    }

    /// Reward for `key`, or zero if absent.
    pub fn get(&self, key: &str) -> f64 {
        self.entries.get(key).copied().unwrap_or(0.0)
    }

    /// Reward for ending a step on a cell labelled `label`.
    pub fn content_reward(&self, label: char) -> f64 {
        let mut buf = [0u8; 4];
        self.get(label.encode_utf8(&mut buf))
    }

    /// Reward for a move outcome.
    pub fn event_reward(&self, outcome: Outcome) -> f64 {
        self.get(outcome.as_str())
    }

    /// Total reward for a step ending on `label` with `outcome`.
    pub fn reward_for(&self, label: char, outcome: Outcome) -> f64 {
        self.content_reward(label) + self.event_reward(outcome)
    }

    /// Iterate `(key, reward)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of configured keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::new().with_label(label::GOAL, 10.0)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RewardTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
