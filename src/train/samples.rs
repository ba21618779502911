use crate::error::NnError;
use crate::math::Vector;

/// One training/evaluation record.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vector,
    pub target: Vector,
}

/// Pairs inputs and targets positionally.
pub fn pair_samples(inputs: Vec<Vector>, targets: Vec<Vector>) -> Result<Vec<Sample>, NnError> {
    if inputs.len() != targets.len() {
        return Err(NnError::Cardinality {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }

    Ok(inputs
        .into_iter()
        .zip(targets)
        .map(|(input, target)| Sample { input, target })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn pairs_in_order() {
        let samples = pair_samples(
            vec![array![1.], array![2.]],
            vec![array![2.], array![3.]],
        )
        .unwrap();

        assert_eq!(
            samples,
            vec![
                Sample {
                    input: array![1.],
                    target: array![2.],
                },
                Sample {
                    input: array![2.],
                    target: array![3.],
                },
            ]
        );
    }

    #[test]
    fn rejects_unequal_cardinality() {
        let err = pair_samples(vec![array![0.]], vec![array![2.], array![3.]]).unwrap_err();
        assert!(matches!(err, NnError::Cardinality { inputs: 1, targets: 2 }));
        assert_eq!(
            err.to_string(),
            "input and target collections of unequal cardinality 1, 2"
        );
    }

    #[test]
    fn empty_collections_pair_to_nothing() {
        assert!(pair_samples(Vec::new(), Vec::new()).unwrap().is_empty());
    }
}
