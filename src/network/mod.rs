pub mod init;
pub mod model;
pub mod network;
pub mod spec;

pub use init::{init_one, init_uniform, WeightInit};
pub use model::{Forward, Trainable};
pub use network::{Network, DEFAULT_LEARNING_RATE};
pub use spec::{DeltaRule, LayerSpec, NetworkSpec};
