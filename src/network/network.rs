use crate::activation::activation::hadamard;
use crate::activation::ActivationFunction;
use crate::error::NnError;
use crate::math::{outer, Matrix, Vector};
use crate::network::spec::{DeltaRule, LayerSpec};

/// Learning rate applied by `update` unless overridden.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Per-layer values cached by the last forward pass.
///
/// Both vectors are either empty (after `reset`) or hold one entry per layer.
#[derive(Debug, Clone, Default)]
struct Scratch {
    activations: Vec<Vector>,
    pre_activations: Vec<Vector>,
}

impl Scratch {
    fn zeroed(specs: &[LayerSpec]) -> Scratch {
        Scratch {
            activations: specs.iter().map(|s| Vector::zeros(s.size)).collect(),
            pre_activations: specs.iter().map(|s| Vector::zeros(s.size)).collect(),
        }
    }

    fn clear(&mut self) {
        self.activations.clear();
        self.pre_activations.clear();
    }

    fn push(&mut self, activation: Vector, pre_activation: Vector) {
        self.activations.push(activation);
        self.pre_activations.push(pre_activation);
    }
}

/// Fully connected feed-forward network trained one sample at a time.
///
/// `weights[i]` maps the activations of layer `i` onto the pre-activations of
/// layer `i + 1` and has shape `(size[i + 1], size[i])`. `biases[0]` exists
/// only to keep indices aligned with layers and is never updated.
#[derive(Debug, Clone)]
pub struct Network {
    layer_specs: Vec<LayerSpec>,
    weights: Vec<Matrix>,
    biases: Vec<Vector>,
    scratch: Scratch,
    learning_rate: f64,
    delta_rule: DeltaRule,
}

impl Network {
    /// Builds a network from its layer specification, drawing every weight
    /// from `init` in row-major order, layer by layer.
    pub fn new<F>(layer_specs: &[LayerSpec], mut init: F) -> Result<Network, NnError>
    where
        F: FnMut() -> f64,
    {
        let first = layer_specs.first().ok_or(NnError::EmptyNetwork)?;
        if first.activation.is_some() {
            return Err(NnError::ActivatedInputLayer);
        }
        if let Some(bad) = layer_specs.iter().find(|s| s.size == 0) {
            return Err(NnError::InvalidLayerSize(bad.size));
        }

        let weights = layer_specs
            .windows(2)
            .map(|pair| Matrix::from_shape_simple_fn((pair[1].size, pair[0].size), &mut init))
            .collect();
        let biases = layer_specs.iter().map(|s| Vector::zeros(s.size)).collect();

        Ok(Network {
            layer_specs: layer_specs.to_vec(),
            weights,
            biases,
            scratch: Scratch::zeroed(layer_specs),
            learning_rate: DEFAULT_LEARNING_RATE,
            delta_rule: DeltaRule::default(),
        })
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Network {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_delta_rule(mut self, delta_rule: DeltaRule) -> Network {
        self.delta_rule = delta_rule;
        self
    }

    pub fn num_layers(&self) -> usize {
        self.layer_specs.len()
    }

    pub fn input_size(&self) -> usize {
        self.layer_specs[0].size
    }

    pub fn output_size(&self) -> usize {
        self.layer_specs[self.num_layers() - 1].size
    }

    pub fn layer_specs(&self) -> &[LayerSpec] {
        &self.layer_specs
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vector] {
        &self.biases
    }

    /// Post-activation values of the last forward pass.
    pub fn activations(&self) -> &[Vector] {
        &self.scratch.activations
    }

    /// Pre-activation (z) values of the last forward pass.
    pub fn pre_activations(&self) -> &[Vector] {
        &self.scratch.pre_activations
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn delta_rule(&self) -> DeltaRule {
        self.delta_rule
    }

    /// Drops the cached values of the previous forward pass.
    pub fn reset(&mut self) {
        self.scratch.clear();
    }

    /// Forward pass. Rebuilds the scratch buffers from scratch and returns a
    /// copy of the output layer's activations.
    pub fn calculate(&mut self, input: &Vector) -> Result<Vector, NnError> {
        if input.len() != self.input_size() {
            return Err(NnError::DimensionMismatch {
                what: "input",
                got: input.len(),
                expected: self.input_size(),
            });
        }

        self.reset();
        self.scratch.push(input.clone(), input.clone());

        for layer in 1..self.num_layers() {
            let z = self.weights[layer - 1].dot(&self.scratch.activations[layer - 1])
                + &self.biases[layer];
            let a = self.activation_of(layer).apply(&z);
            self.scratch.push(a, z);
        }

        Ok(self.scratch.activations[self.num_layers() - 1].clone())
    }

    /// Backward pass against `target`, using the values cached by the last
    /// `calculate`.
    ///
    /// Returns one delta per non-input layer in ascending layer order: entry
    /// `k` is the error signal of layer `k + 1`.
    pub fn generate_delta(&self, target: &Vector) -> Result<Vec<Vector>, NnError> {
        if target.len() != self.output_size() {
            return Err(NnError::DimensionMismatch {
                what: "target",
                got: target.len(),
                expected: self.output_size(),
            });
        }
        if self.scratch.activations.len() != self.num_layers() {
            return Err(NnError::MissingForwardPass);
        }

        let last = self.num_layers() - 1;
        if last == 0 {
            return Ok(Vec::new());
        }

        let mut deltas = Vec::with_capacity(last);
        let mut delta = self.scale_by_derivative(last, &self.scratch.activations[last] - target);
        for layer in (1..last).rev() {
            let propagated = self.weights[layer].t().dot(&delta);
            deltas.push(delta);
            delta = self.scale_by_derivative(layer, propagated);
        }
        deltas.push(delta);
        deltas.reverse();

        log::trace!("generated {} deltas", deltas.len());
        Ok(deltas)
    }

    /// One gradient step from the deltas produced by `generate_delta`.
    ///
    /// Shapes are checked before anything is written, so a rejected update
    /// leaves the network untouched.
    pub fn update(&mut self, deltas: &[Vector]) -> Result<(), NnError> {
        let expected = self.num_layers() - 1;
        if deltas.len() != expected {
            return Err(NnError::DimensionMismatch {
                what: "delta count",
                got: deltas.len(),
                expected,
            });
        }
        if let Some((delta, spec)) = deltas
            .iter()
            .zip(&self.layer_specs[1..])
            .find(|(delta, spec)| delta.len() != spec.size)
        {
            return Err(NnError::DimensionMismatch {
                what: "delta",
                got: delta.len(),
                expected: spec.size,
            });
        }
        if self.scratch.activations.len() != self.num_layers() {
            return Err(NnError::MissingForwardPass);
        }

        let learning_rate = self.learning_rate;

        for (bias, delta) in self.biases[1..].iter_mut().zip(deltas) {
            bias.scaled_add(-learning_rate, delta);
        }

        for ((weight, delta), activation) in self
            .weights
            .iter_mut()
            .zip(deltas)
            .zip(&self.scratch.activations)
        {
            let scaled = delta * learning_rate;
            *weight -= &outer(scaled.view(), activation.view());
        }

        Ok(())
    }

    /// Transfer function of a non-input layer. A layer configured without
    /// one behaves as `Identity`.
    fn activation_of(&self, layer: usize) -> ActivationFunction {
        self.layer_specs[layer]
            .activation
            .unwrap_or(ActivationFunction::Identity)
    }

    fn scale_by_derivative(&self, layer: usize, delta: Vector) -> Vector {
        match self.delta_rule {
            DeltaRule::Direct => delta,
            DeltaRule::ActivationDerivative => {
                let derivative = self
                    .activation_of(layer)
                    .apply_derivative(&self.scratch.pre_activations[layer]);
                hadamard(&delta, &derivative)
            }
        }
    }
}
