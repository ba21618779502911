use crate::math::{argmax, Vector};

/// Counts a prediction as correct when its largest element sits at the same
/// index as the target's largest element. Ties resolve to the first index.
///
/// # Panics
/// Panics if the vectors differ in length or are empty.
pub fn max_judge(actual: &Vector, expected: &Vector) -> bool {
    assert_eq!(
        actual.len(),
        expected.len(),
        "max_judge requires identical length vectors"
    );
    assert!(!actual.is_empty(), "max_judge requires non-empty vectors");

    argmax(actual.view()) == argmax(expected.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn matching_max_indices() {
        assert!(max_judge(&array![1., 2., 3.], &array![5., 2., 7.]));
    }

    #[test]
    fn different_max_indices() {
        assert!(!max_judge(&array![1., 2., 3.], &array![5., 2., 1.]));
    }

    #[test]
    fn ties_use_first_occurrence() {
        assert!(max_judge(&array![0.5, 0.5], &array![1., 0.]));
        assert!(!max_judge(&array![0.5, 0.5], &array![0., 1.]));
    }

    #[test]
    #[should_panic(expected = "identical length")]
    fn panics_on_length_mismatch() {
        max_judge(&array![1., 2.], &array![1.]);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn panics_on_empty_vectors() {
        max_judge(&Vector::zeros(0), &Vector::zeros(0));
    }
}
