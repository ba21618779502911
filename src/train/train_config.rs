use serde::{Deserialize, Serialize};

use crate::network::{DeltaRule, DEFAULT_LEARNING_RATE};

/// Hyperparameters of a `train_and_evaluate` run.
///
/// # Fields
/// - `epochs`        : number of evaluate-then-train rounds
/// - `batch_size`    : samples per update; only `1` is implemented
/// - `learning_rate` : SGD step size, `0.01` unless configured
/// - `delta_rule`    : backward-pass rule handed to the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub delta_rule: DeltaRule,
}

fn default_epochs() -> usize {
    10
}

fn default_batch_size() -> usize {
    1
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the default learning rate and delta rule.
    pub fn new(epochs: usize, batch_size: usize) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            learning_rate: DEFAULT_LEARNING_RATE,
            delta_rule: DeltaRule::default(),
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(default_epochs(), default_batch_size())
    }
}
