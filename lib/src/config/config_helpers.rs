// lib/src/config/config_helpers.rs

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use models::GraphResult;

use crate::config::config_defaults::DEFAULT_GRAPH_CONFIG_PATH_RELATIVE;
use crate::config::config_structs::{GraphConfig, GraphConfigWrapper};

/// Loads the graph configuration from a YAML file.
///
/// Falls back to [`GraphConfig::default`] when the file does not exist. A file
/// that exists but cannot be read or parsed is an error.
pub fn load_graph_config(config_file_path: Option<&str>) -> GraphResult<GraphConfig> {
    let path_to_use = config_file_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_CONFIG_PATH_RELATIVE));

    if !path_to_use.exists() {
        warn!("Config file not found at {}. Using default graph config.", path_to_use.display());
        return Ok(GraphConfig::default());
    }

    let config_content = fs::read_to_string(&path_to_use)?;
    debug!("Graph config content: {}", config_content);
    let wrapper: GraphConfigWrapper = serde_yaml::from_str(&config_content).map_err(|e| {
        error!("YAML parsing error for graph config at {:?}: {}", path_to_use, e);
        e
    })?;
    info!("Loaded graph config from {}: {:?}", path_to_use.display(), wrapper.graph);
    Ok(wrapper.graph)
}

/// Writes the graph configuration as YAML, creating parent directories.
pub fn save_graph_config(config: &GraphConfig, path: &Path) -> GraphResult<()> {
    let wrapper = GraphConfigWrapper { graph: config.clone() };
    let yaml_string = serde_yaml::to_string(&wrapper)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, yaml_string)?;
    info!("Saved graph config to {}", path.display());
    Ok(())
}
