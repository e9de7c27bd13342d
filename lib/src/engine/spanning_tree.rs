// lib/src/engine/spanning_tree.rs

//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Edges are popped cheapest-first from a priority queue and accepted when
//! they join two different components; components are tracked with an
//! index-based union-find.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::slice;
use std::sync::Arc;
use std::vec;

use log::{debug, trace};
use models::{Edge, GraphError, GraphResult, WeightedEdge};
use ordered_float::NotNan;

use crate::config::SpanningScope;
use crate::engine::graph::WeightedGraph;
use crate::engine::union_find::Components;

/// Edges of a minimum spanning tree (or forest) in acceptance order, which is
/// non-decreasing by weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<E = Edge> {
    edges: Vec<Arc<E>>,
    total_weight: f64,
}

impl<E> SpanningTree<E> {
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

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
}

impl<E> IntoIterator for SpanningTree<E> {
    type Item = Arc<E>;
    type IntoIter = vec::IntoIter<Arc<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SpanningTree<E> {
    type Item = &'a Arc<E>;
    type IntoIter = slice::Iter<'a, Arc<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// An edge waiting in the queue, by index into the graph's edge list.
/// Equal weights pop in insertion order.
#[derive(PartialEq, Eq)]
struct Candidate {
    weight: NotNan<f64>,
    index: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: WeightedEdge> WeightedGraph<E> {
    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Under the default [`SpanningScope::RootComponent`] only the tree of the
    /// component containing the configured root (node 0 unless configured) is
    /// returned; on a disconnected graph the other components are left out.
    /// [`SpanningScope::Forest`] returns the tree edges of every component.
    ///
    /// # Errors
    /// Returns [`GraphError::ConfigurationError`] if the graph has no nodes.
    pub fn minimum_spanning_tree(&self) -> GraphResult<SpanningTree<E>> {
        let node_count = self.node_count();
        if node_count == 0 {
            return Err(GraphError::ConfigurationError(
                "cannot build a spanning tree over a graph with no nodes".to_string(),
            ));
        }
        debug!(
            "Building spanning tree over {} nodes and {} edges ({:?})",
            node_count,
            self.edge_count(),
            self.config.spanning_scope
        );

        let mut queue = self
            .edges
            .iter()
            .enumerate()
            .map(|(index, edge)| -> GraphResult<Candidate> {
                Ok(Candidate { weight: NotNan::new(edge.weight())?, index })
            })
            .collect::<GraphResult<BinaryHeap<_>>>()?;

        let mut components = Components::new(node_count);
        let mut accepted = Vec::with_capacity(node_count - 1);
        while components.count() > 1 {
            let Some(candidate) = queue.pop() else {
                break;
            };
            let edge = &self.edges[candidate.index];
            if components.union(edge.from(), edge.to()) {
                accepted.push(Arc::clone(edge));
            } else {
                trace!("Skipping edge {} -> {}: would close a cycle", edge.from(), edge.to());
            }
        }

        let edges: Vec<Arc<E>> = match self.config.spanning_scope {
            SpanningScope::Forest => accepted,
            SpanningScope::RootComponent => {
                let root = components.find(self.config.root);
                accepted
                    .into_iter()
                    .filter(|edge| components.find(edge.from()) == root)
                    .collect()
            }
        };
        let total_weight: f64 = edges.iter().map(|edge| edge.weight()).sum();
        debug!("Spanning tree has {} edges, total weight {}", edges.len(), total_weight);

        Ok(SpanningTree { edges, total_weight })
    }
}
