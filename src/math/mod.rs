pub mod matrix;

pub use matrix::{argmax, outer, Matrix, Vector};
