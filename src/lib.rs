pub mod activation;
pub mod data;
pub mod error;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::ActivationFunction;
pub use error::{DataError, NnError, Stage};
pub use math::{Matrix, Vector};
pub use network::{DeltaRule, Forward, LayerSpec, Network, NetworkSpec, Trainable, WeightInit};
pub use train::{evaluate, max_judge, pair_samples, train, train_and_evaluate, Sample, TrainConfig};
