// lib/src/config/config_structs.rs

use models::{ensure_in_range, GraphError, GraphResult, NodeId};
use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;

/// Which part of the graph `minimum_spanning_tree` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanningScope {
    /// Only the tree of the component containing the configured root node.
    RootComponent,
    /// Tree edges of every component, i.e. a minimum spanning forest.
    Forest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_spanning_scope")]
    pub spanning_scope: SpanningScope,
    /// Node whose component is reported under [`SpanningScope::RootComponent`].
    #[serde(default = "default_root")]
    pub root: NodeId,
    #[serde(default = "default_parallel_batch_threshold")]
    pub parallel_batch_threshold: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            spanning_scope: default_spanning_scope(),
            root: default_root(),
            parallel_batch_threshold: default_parallel_batch_threshold(),
        }
    }
}

impl GraphConfig {
    /// Checks the configuration against a graph of `node_count` nodes.
    ///
    /// An empty graph accepts any root; spanning tree queries on it fail
    /// regardless.
    pub fn validate(&self, node_count: usize) -> GraphResult<()> {
        if node_count == 0 {
            return Ok(());
        }
        ensure_in_range(self.root, node_count).map_err(|_| {
            GraphError::ConfigurationError(format!(
                "root node {} is out of range for a graph of {} nodes",
                self.root, node_count
            ))
        })
    }
}

/// On-disk layout: the graph settings live under a top-level `graph` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfigWrapper {
    #[serde(default)]
    pub graph: GraphConfig,
}
