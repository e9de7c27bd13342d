// lib/src/engine/mod.rs

pub mod graph;
pub mod path;
pub mod shortest_path;
pub mod spanning_tree;
mod union_find;

// Public re-exports
pub use graph::WeightedGraph;
pub use path::Path;
pub use spanning_tree::SpanningTree;
