// models/src/lib.rs

//! Shared types for the weighted graph engine: node identifiers, the edge
//! collaborator trait with its concrete [`Edge`], and the error types.

pub mod edges;
pub mod errors;
pub mod identifiers;

pub use edges::{validate_weight, Edge, WeightedEdge};
pub use errors::{GraphError, GraphResult, ValidationError, ValidationResult};
pub use identifiers::{ensure_in_range, NodeId};
