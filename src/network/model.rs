use crate::error::NnError;
use crate::math::Vector;
use crate::network::network::Network;

/// Anything that can map an input vector to an output vector.
pub trait Forward {
    fn calculate(&mut self, input: &Vector) -> Result<Vector, NnError>;
}

/// A `Forward` model that learns from per-sample deltas.
pub trait Trainable: Forward {
    fn generate_delta(&mut self, target: &Vector) -> Result<Vec<Vector>, NnError>;
    fn update(&mut self, deltas: &[Vector]) -> Result<(), NnError>;
}

impl Forward for Network {
    fn calculate(&mut self, input: &Vector) -> Result<Vector, NnError> {
        Network::calculate(self, input)
    }
}

impl Trainable for Network {
    fn generate_delta(&mut self, target: &Vector) -> Result<Vec<Vector>, NnError> {
        Network::generate_delta(self, target)
    }

    fn update(&mut self, deltas: &[Vector]) -> Result<(), NnError> {
        Network::update(self, deltas)
    }
}
