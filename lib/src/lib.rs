// lib/src/lib.rs

//! A weighted graph over dense node ids answering two queries: the cheapest
//! path between a pair of nodes (Dijkstra) and a minimum spanning tree
//! (Kruskal).
//!
//! ```
//! use wgraph::{Edge, WeightedGraph};
//!
//! let mut graph: WeightedGraph = WeightedGraph::new(4);
//! for (from, to, weight) in [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0), (2, 3, 1.0)] {
//!     graph.add_edge(Edge::new(from, to, weight)?)?;
//! }
//!
//! let path = graph.shortest_path(0, 3)?.expect("0 and 3 are connected");
//! assert_eq!(path.nodes(), vec![0, 1, 2, 3]);
//! assert_eq!(path.cost(), 4.0);
//!
//! let tree = graph.minimum_spanning_tree()?;
//! assert_eq!(tree.total_weight(), 4.0);
//! # Ok::<(), wgraph::GraphError>(())
//! ```
//!
//! Edges are shared, not copied: the graph keeps each one behind an `Arc` and
//! query results hand out those same `Arc`s. Any type implementing
//! [`WeightedEdge`] can be stored.

pub mod config;
pub mod engine;

pub use crate::config::{load_graph_config, GraphConfig, SpanningScope};
pub use crate::engine::{Path, SpanningTree, WeightedGraph};
pub use models::{Edge, GraphError, GraphResult, NodeId, ValidationError, WeightedEdge};
