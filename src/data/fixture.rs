use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{DataError, NnError};
use crate::math::Vector;
use crate::train::{pair_samples, Sample};

#[derive(Deserialize)]
struct RawFixture {
    inputs: Vec<Vec<f64>>,
    solutions: Vec<Vec<f64>>,
}

/// Labelled vectors read from a JSON document of the form
/// `{"inputs": [[..], ..], "solutions": [[..], ..]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub inputs: Vec<Vector>,
    pub targets: Vec<Vector>,
}

impl Fixture {
    pub fn into_samples(self) -> Result<Vec<Sample>, NnError> {
        pair_samples(self.inputs, self.targets)
    }
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Fixture, DataError> {
    let file = File::open(path.as_ref())?;
    let fixture = from_reader(BufReader::new(file))?;
    log::info!(
        "loaded {} fixture rows from {}",
        fixture.inputs.len(),
        path.as_ref().display()
    );
    Ok(fixture)
}

/// Parses a fixture. Every row of a column must have the same length.
pub fn from_reader<R: Read>(reader: R) -> Result<Fixture, DataError> {
    let raw: RawFixture = serde_json::from_reader(reader)?;
    Ok(Fixture {
        inputs: to_vectors(raw.inputs, "inputs")?,
        targets: to_vectors(raw.solutions, "solutions")?,
    })
}

fn to_vectors(rows: Vec<Vec<f64>>, column: &str) -> Result<Vec<Vector>, DataError> {
    let width = rows.first().map(Vec::len);
    if let Some((idx, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| Some(row.len()) != width)
    {
        return Err(DataError::Format(format!(
            "fixture {column}[{idx}] has {} values, expected {}",
            row.len(),
            width.unwrap_or_default()
        )));
    }
    Ok(rows.into_iter().map(Vector::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn reads_inputs_and_solutions() {
        let json = r#"{"inputs": [[0.1, 0.2], [0.3, 0.4]], "solutions": [[1, 0], [0, 1]]}"#;
        let fixture = from_reader(json.as_bytes()).unwrap();
        assert_eq!(fixture.inputs, vec![array![0.1, 0.2], array![0.3, 0.4]]);
        assert_eq!(fixture.targets, vec![array![1., 0.], array![0., 1.]]);

        let samples = fixture.into_samples().unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].target, array![0., 1.]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let json = r#"{"inputs": [[0.1, 0.2], [0.3]], "solutions": [[1, 0], [0, 1]]}"#;
        let err = from_reader(json.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "malformed data: fixture inputs[1] has 1 values, expected 2");
    }

    #[test]
    fn rejects_missing_column() {
        let err = from_reader(r#"{"inputs": []}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn unequal_columns_fail_when_paired() {
        let json = r#"{"inputs": [[0.1]], "solutions": [[1], [0]]}"#;
        let err = from_reader(json.as_bytes()).unwrap().into_samples().unwrap_err();
        assert!(matches!(err, NnError::Cardinality { inputs: 1, targets: 2 }));
    }
}
