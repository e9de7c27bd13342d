// lib/src/engine/graph.rs

use std::sync::Arc;

use log::{trace, warn};
use models::{ensure_in_range, validate_weight, Edge, GraphResult, NodeId, WeightedEdge};

use crate::config::GraphConfig;

/// A graph over a fixed set of dense node ids with weighted edges.
///
/// Every edge is stored once behind an [`Arc`] and indexed from both of its
/// endpoints, so traversal treats it as undirected. Edges are only ever added;
/// once the build phase is over the graph is read-only and can be shared
/// between threads.
#[derive(Debug)]
pub struct WeightedGraph<E = Edge> {
    // node id -> edges incident to it
    adjacency: Vec<Vec<Arc<E>>>,
    // every edge exactly once, in insertion order
    pub(crate) edges: Vec<Arc<E>>,
    pub(crate) config: GraphConfig,
}

impl<E: WeightedEdge> WeightedGraph<E> {
    /// Creates an empty graph of `node_count` nodes with the default config.
    pub fn new(node_count: usize) -> Self {
        WeightedGraph {
            adjacency: (0..node_count).map(|_| Vec::new()).collect(),
            edges: Vec::new(),
            config: GraphConfig::default(),
        }
    }

    /// Creates an empty graph of `node_count` nodes.
    ///
    /// # Errors
    /// Returns a configuration error if `config.root` does not address a node.
    pub fn with_config(node_count: usize, config: GraphConfig) -> GraphResult<Self> {
        config.validate(node_count)?;
        let mut graph = Self::new(node_count);
        graph.config = config;
        Ok(graph)
    }

    /// Builds a graph from an edge list, stopping at the first rejected edge.
    pub fn from_edges<I>(node_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arc<E>>,
    {
        let mut graph = Self::new(node_count);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Adds an edge, indexing it from both endpoints.
    ///
    /// # Errors
    /// Rejects the edge, leaving the graph untouched, if either endpoint is
    /// out of range or the weight is negative or NaN.
    pub fn add_edge(&mut self, edge: impl Into<Arc<E>>) -> GraphResult<()> {
        let edge = edge.into();
        let (from, to) = (edge.from(), edge.to());
        let node_count = self.node_count();

        if let Err(e) = ensure_in_range(from, node_count)
            .and_then(|_| ensure_in_range(to, node_count))
        {
            warn!("Rejecting edge {} -> {}: {}", from, to, e);
            return Err(e);
        }
        if let Err(e) = validate_weight(edge.weight()) {
            warn!("Rejecting edge {} -> {}: {}", from, to, e);
            return Err(e.into());
        }

        self.adjacency[from].push(Arc::clone(&edge));
        if to != from {
            self.adjacency[to].push(Arc::clone(&edge));
        }
        self.edges.push(edge);
        trace!("Added edge {} -> {} (edge count {})", from, to, self.edges.len());
        Ok(())
    }

    /// Adds `edge` if present; `None` is a no-op.
    pub fn add_optional_edge<T: Into<Arc<E>>>(&mut self, edge: Option<T>) -> GraphResult<()> {
        match edge {
            Some(edge) => self.add_edge(edge),
            None => {
                trace!("Ignoring absent edge");
                Ok(())
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, each once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Arc<E>> {
        self.edges.iter()
    }

    /// Edges incident to `node`, in insertion order.
    pub fn incident_edges(&self, node: NodeId) -> GraphResult<&[Arc<E>]> {
        ensure_in_range(node, self.node_count())?;
        Ok(&self.adjacency[node])
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub(crate) fn adjacency(&self, node: NodeId) -> &[Arc<E>] {
        &self.adjacency[node]
    }
}
