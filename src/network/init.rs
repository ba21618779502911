use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Every weight starts at 1.0.
pub fn init_one() -> f64 {
    1.0
}

/// Draws weights uniformly from `[0, 1)` using a caller-provided generator.
pub fn init_uniform<R: Rng>(rng: &mut R) -> impl FnMut() -> f64 + '_ {
    move || rng.gen::<f64>()
}

/// Serializable choice of weight-initialization rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeightInit {
    #[default]
    One,
    /// Uniform in `[0, 1)` from a `StdRng` seeded with `seed`.
    Uniform { seed: u64 },
}

impl WeightInit {
    /// Materializes the rule as a weight source.
    pub fn source(&self) -> Box<dyn FnMut() -> f64> {
        match *self {
            WeightInit::One => Box::new(init_one),
            WeightInit::Uniform { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                Box::new(move || rng.gen::<f64>())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_reproducible_and_in_range() {
        let mut a = WeightInit::Uniform { seed: 92 }.source();
        let mut b = WeightInit::Uniform { seed: 92 }.source();
        for _ in 0..100 {
            let x = a();
            assert_eq!(x, b());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn parses_from_json() {
        let init: WeightInit = serde_json::from_str(r#"{"type":"uniform","seed":7}"#).unwrap();
        assert_eq!(init, WeightInit::Uniform { seed: 7 });
        let init: WeightInit = serde_json::from_str(r#"{"type":"one"}"#).unwrap();
        assert_eq!(init, WeightInit::One);
    }
}
