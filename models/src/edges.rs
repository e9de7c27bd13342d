// models/src/edges.rs
use std::fmt;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::NodeId;

/// The collaborator a weighted graph consumes: two endpoints and a weight.
///
/// Implementors are expected to be immutable once handed to a graph; the graph
/// shares them between both endpoints' adjacency lists and never copies them.
pub trait WeightedEdge {
    /// First endpoint.
    fn from(&self) -> NodeId;

    /// Second endpoint.
    fn to(&self) -> NodeId;

    /// Non-negative traversal cost.
    fn weight(&self) -> f64;

    /// The endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    ///
    /// Edges are traversable in both directions, so a search standing on
    /// either endpoint uses this to find the neighbor.
    fn other_endpoint(&self, node: NodeId) -> Option<NodeId> {
        if self.from() == node {
            Some(self.to())
        } else if self.to() == node {
            Some(self.from())
        } else {
            None
        }
    }
}

/// A weighted connection between two nodes.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEdge")]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    weight: NotNan<f64>,
}

impl Edge {
    /// Create a new edge.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidWeight`] if `weight` is negative or NaN.
    pub fn new(from: NodeId, to: NodeId, weight: f64) -> ValidationResult<Self> {
        let weight = validate_weight(weight)?;
        Ok(Self { from, to, weight })
    }

    /// Whether `node` is one of the two endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// Whether both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl WeightedEdge for Edge {
    fn from(&self) -> NodeId {
        self.from
    }

    fn to(&self) -> NodeId {
        self.to
    }

    fn weight(&self) -> f64 {
        self.weight.into_inner()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.to, self.weight)
    }
}

/// Wire shape of an [`Edge`]; deserialization goes through
/// [`Edge::new`] so a stored negative weight is rejected on load.
#[derive(Deserialize)]
struct RawEdge {
    from: NodeId,
    to: NodeId,
    weight: f64,
}

impl TryFrom<RawEdge> for Edge {
    type Error = ValidationError;

    fn try_from(raw: RawEdge) -> ValidationResult<Self> {
        Edge::new(raw.from, raw.to, raw.weight)
    }
}

/// Checks a weight for use as a traversal cost.
pub fn validate_weight(weight: f64) -> ValidationResult<NotNan<f64>> {
    match NotNan::new(weight) {
        Ok(w) if w.into_inner() >= 0.0 => Ok(w),
        _ => Err(ValidationError::InvalidWeight(weight)),
    }
}
