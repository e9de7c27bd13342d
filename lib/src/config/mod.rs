// lib/src/config/mod.rs

pub mod config_defaults;
pub mod config_helpers;
pub mod config_structs;

pub use config_defaults::DEFAULT_GRAPH_CONFIG_PATH_RELATIVE;
pub use config_helpers::{load_graph_config, save_graph_config};
pub use config_structs::{GraphConfig, GraphConfigWrapper, SpanningScope};
