//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "GWB_CONFIG";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gwb.toml";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    /// Whether a new session starts directed.
    #[serde(default)]
    pub directed: bool,
    /// Whether a new session starts weighted.
    #[serde(default)]
    pub weighted: bool,
    /// Whether `load` splits vertices into letter and number sides.
    #[serde(default)]
    pub bipartite: bool,
    /// Edge-list file used by `load` and `save` without a path.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("grafo.txt")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            bipartite: false,
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<WorkbenchConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Config(format!(
            "failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content)
        .map_err(|e| GraphError::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Resolve configuration using priority order:
/// 1. Explicit path (CLI arg)
/// 2. GWB_CONFIG environment variable
/// 3. gwb.toml in current directory
/// 4. Built-in defaults
pub fn resolve_config(explicit: Option<&Path>) -> GraphResult<WorkbenchConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config(Path::new(&env_path));
    }

    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return load_config(local);
    }

    Ok(WorkbenchConfig::default())
}
