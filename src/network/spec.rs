use serde::{Deserialize, Serialize};

use crate::activation::ActivationFunction;
use crate::network::init::WeightInit;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `size`       : number of neurons in this layer
/// - `activation` : transfer function applied after the linear transform;
///                  must be `None` for the input layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    #[serde(default)]
    pub activation: Option<ActivationFunction>,
}

impl LayerSpec {
    /// The activation-free first layer.
    pub fn input(size: usize) -> LayerSpec {
        LayerSpec {
            size,
            activation: None,
        }
    }

    pub fn new(size: usize, activation: ActivationFunction) -> LayerSpec {
        LayerSpec {
            size,
            activation: Some(activation),
        }
    }
}

/// How `generate_delta` turns the output error into per-layer deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeltaRule {
    /// `a − y` at the output, `Wᵀ·δ` below it, no activation-derivative
    /// factor anywhere.
    #[default]
    Direct,
    /// Multiplies every delta element-wise by its layer's activation
    /// derivative (textbook backpropagation).
    ActivationDerivative,
}

/// A serializable description of a network architecture and its weight
/// initialization. Trained weights are never part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub weight_init: WeightInit,
}
