use std::fmt;

/// Training step at which a sample failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Calculate,
    GenerateDelta,
    Update,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Calculate => write!(f, "calculation"),
            Stage::GenerateDelta => write!(f, "delta generation"),
            Stage::Update => write!(f, "update"),
        }
    }
}

/// Errors produced by network construction, the network operations and the
/// training loop.
#[derive(Debug)]
pub enum NnError {
    /// The layer specification list was empty.
    EmptyNetwork,

    /// The input layer was given an activation function.
    ActivatedInputLayer,

    /// A layer was configured with a non-positive size.
    InvalidLayerSize(usize),

    /// A vector or matrix did not have the shape the operation requires.
    DimensionMismatch {
        /// What was being checked (e.g. "input", "target", "delta 2").
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// Delta generation was requested before any forward pass.
    MissingForwardPass,

    /// Inputs and targets could not be paired.
    Cardinality { inputs: usize, targets: usize },

    /// Only one sample per update is implemented.
    UnsupportedBatchSize(usize),

    /// A lower-level failure annotated with the sample that caused it.
    Sample {
        stage: Stage,
        index: usize,
        source: Box<NnError>,
    },
}

impl NnError {
    /// True for errors caused by an invalid layer specification.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            NnError::EmptyNetwork | NnError::ActivatedInputLayer | NnError::InvalidLayerSize(_)
        )
    }

    /// True for shape errors at a computation boundary.
    pub fn is_dimension(&self) -> bool {
        matches!(
            self,
            NnError::DimensionMismatch { .. } | NnError::MissingForwardPass
        )
    }

    pub(crate) fn at_sample(self, stage: Stage, index: usize) -> NnError {
        NnError::Sample {
            stage,
            index,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for NnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NnError::EmptyNetwork => {
                write!(f, "layer specification must contain at least 1 layer")
            }
            NnError::ActivatedInputLayer => {
                write!(f, "input layer must not have an activation function")
            }
            NnError::InvalidLayerSize(size) => write!(f, "invalid layer size: {size}"),
            NnError::DimensionMismatch { what, got, expected } => {
                write!(f, "invalid {what} dimension: {got}, expected {expected}")
            }
            NnError::MissingForwardPass => {
                write!(f, "no cached activations, calculate must run first")
            }
            NnError::Cardinality { inputs, targets } => write!(
                f,
                "input and target collections of unequal cardinality {inputs}, {targets}"
            ),
            NnError::UnsupportedBatchSize(size) => {
                write!(f, "unimplemented batch size != 1, {size} received")
            }
            NnError::Sample { stage, index, source } => {
                write!(f, "network {stage} failed on sample at index {index}: {source}")
            }
        }
    }
}

impl std::error::Error for NnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NnError::Sample { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Errors produced while decoding datasets.
#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// The bytes were readable but do not follow the expected layout.
    Format(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "i/o error: {e}"),
            DataError::Json(e) => write!(f, "invalid json: {e}"),
            DataError::Format(msg) => write!(f, "malformed data: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            DataError::Json(e) => Some(e),
            DataError::Format(_) => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Json(e)
    }
}
