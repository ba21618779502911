use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Dense column vector used for activations, biases and deltas.
pub type Vector = Array1<f64>;

/// Dense row-major matrix; `weights[i]` has shape `(next_size, prev_size)`.
pub type Matrix = Array2<f64>;

/// Outer product `v ⊗ wᵀ`, shape `(v.len(), w.len())`.
pub fn outer(v: ArrayView1<f64>, w: ArrayView1<f64>) -> Matrix {
    let column = v.insert_axis(Axis(1));
    let row = w.insert_axis(Axis(0));
    column.dot(&row)
}

/// Index of the largest element; the first occurrence wins on ties.
///
/// Returns `None` for an empty vector.
pub fn argmax(v: ArrayView1<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &x) in v.iter().enumerate() {
        match best {
            Some((_, max)) if x > max => best = Some((idx, x)),
            None => best = Some((idx, x)),
            _ => {}
        }
    }
    best.map(|(idx, _)| idx)
}
