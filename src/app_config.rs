use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use tinynet::{NetworkSpec, TrainConfig};

/// Run configuration file format: the network architecture plus training
/// hyperparameters at the top level (omitted ones take their defaults).
///
/// ```json
/// {
///   "network": {
///     "layers": [{"size": 2}, {"size": 2, "activation": "Sigmoid"}],
///     "weight_init": {"type": "uniform", "seed": 92}
///   },
///   "epochs": 100
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RunConfig {
    pub network: NetworkSpec,
    #[serde(flatten)]
    pub training: TrainConfig,
}

impl RunConfig {
    pub fn load(path: &Path) -> anyhow::Result<RunConfig> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("cannot open config {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("invalid config {}", path.display()))
    }
}
