pub mod judge;
pub mod loop_fn;
pub mod samples;
pub mod train_config;

pub use judge::max_judge;
pub use loop_fn::{evaluate, train, train_and_evaluate};
pub use samples::{pair_samples, Sample};
pub use train_config::TrainConfig;
