use ndarray::{ArrayView1, Zip};
use serde::{Deserialize, Serialize};
use std::f64::consts::E;

use crate::math::Vector;

/// Per-neuron transfer function of a non-input layer.
///
/// Every variant receives the whole layer vector as `context` alongside the
/// scalar it transforms; only `Softmax` actually reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Fixed, non-learning transfer: value is `x`, derivative is always 0.
    Identity,
    Sigmoid,
    ReLU,
    /// `e^x / Σ e^(v_j)` over the layer vector. The derivative is the
    /// diagonal approximation `s·(1−s)`, not the full Jacobian.
    Softmax,
}

impl ActivationFunction {
    pub fn function(&self, x: f64, context: ArrayView1<f64>) -> f64 {
        match self {
            ActivationFunction::Identity => x,
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Softmax => {
                // Shifting by the max leaves the ratio unchanged and keeps exp() finite.
                let shift = context.iter().cloned().fold(x, f64::max);
                let denom: f64 = context.iter().map(|v| (v - shift).exp()).sum();
                (x - shift).exp() / denom
            }
        }
    }

    pub fn derivative(&self, x: f64, context: ArrayView1<f64>) -> f64 {
        match self {
            ActivationFunction::Identity => 0.0,
            ActivationFunction::Sigmoid | ActivationFunction::Softmax => {
                let fx = self.function(x, context);
                fx * (1.0 - fx)
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }

    /// Applies `function` to every element of `z`, with the unmodified `z` as
    /// context for each element.
    pub fn apply(&self, z: &Vector) -> Vector {
        let context = z.view();
        z.mapv(|x| self.function(x, context))
    }

    /// Element-wise derivative of a whole pre-activation vector.
    pub fn apply_derivative(&self, z: &Vector) -> Vector {
        let context = z.view();
        z.mapv(|x| self.derivative(x, context))
    }
}

/// Hadamard product `a ⊙ b` of two equal-length vectors.
pub(crate) fn hadamard(a: &Vector, b: &Vector) -> Vector {
    Zip::from(a).and(b).map_collect(|x, y| x * y)
}
