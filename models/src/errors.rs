// models/src/errors.rs

use std::io;

use ordered_float::FloatIsNan;
pub use thiserror::Error;

use crate::identifiers::NodeId;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph or its configuration cannot support the requested operation,
    /// e.g. a spanning tree over a graph with no nodes.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("File I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<FloatIsNan> for GraphError {
    fn from(_: FloatIsNan) -> Self {
        GraphError::Validation(ValidationError::InvalidWeight(f64::NAN))
    }
}

/// A validation error.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Edge weights must be non-negative numbers; NaN is rejected as well.
    #[error("invalid edge weight {0}, expected a non-negative number")]
    InvalidWeight(f64),
}

/// A type alias for a `Result` that returns a `GraphError` on failure.
pub type GraphResult<T> = Result<T, GraphError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
