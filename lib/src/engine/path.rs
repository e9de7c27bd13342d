// lib/src/engine/path.rs

use std::slice;
use std::sync::Arc;
use std::vec;

use models::{Edge, NodeId, WeightedEdge};

/// A route between two nodes: the edges in traversal order and their total
/// weight. The edges are the graph's own shared values.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<E = Edge> {
    start: NodeId,
    edges: Vec<Arc<E>>,
    cost: f64,
}

impl<E: WeightedEdge> Path<E> {
    pub(crate) fn new(start: NodeId, edges: Vec<Arc<E>>, cost: f64) -> Self {
        Path { start, edges, cost }
    }

    /// Node the path starts from.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Sum of the edge weights; `0.0` for the trivial path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Arc<E>] {
        &self.edges
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<E>> {
        self.edges.iter()
    }

    pub fn into_edges(self) -> Vec<Arc<E>> {
        self.edges
    }

    /// The visited nodes, from the start node to the end node inclusive.
    ///
    /// Edges may be stored in either orientation; each hop crosses to the
    /// endpoint opposite the current node.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        let mut current = self.start;
        nodes.push(current);
        for edge in &self.edges {
            current = edge.other_endpoint(current).unwrap_or(current);
            nodes.push(current);
        }
        nodes
    }
}

impl<E> IntoIterator for Path<E> {
    type Item = Arc<E>;
    type IntoIter = vec::IntoIter<Arc<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Path<E> {
    type Item = &'a Arc<E>;
    type IntoIter = slice::Iter<'a, Arc<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
