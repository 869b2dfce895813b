//! Session configuration.

pub mod loader;

pub use loader::{load_config, resolve_config, WorkbenchConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
