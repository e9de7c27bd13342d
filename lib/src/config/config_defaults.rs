// lib/src/config/config_defaults.rs

use models::NodeId;

use crate::config::config_structs::SpanningScope;

pub const DEFAULT_GRAPH_CONFIG_PATH_RELATIVE: &str = "./config/graph_config.yaml";

pub fn default_spanning_scope() -> SpanningScope { SpanningScope::RootComponent }
pub fn default_root() -> NodeId { 0 }
// Below this many pairs a batch runs on the calling thread.
pub fn default_parallel_batch_threshold() -> usize { 16 }
