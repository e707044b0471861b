//! Studio settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the server and TUI, with sensible defaults for every field.
///
/// Command-line flags take precedence over file values.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Host the API server binds to.
    #[serde(default = "default_host")]
    host: String,

    /// Port the API server binds to.
    #[serde(default = "default_port")]
    port: u16,

    /// Path to the SQLite puzzle database.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// Base URL the TUI talks to.
    #[serde(default = "default_server_url")]
    server_url: String,

    /// Default grid height offered by the create form.
    #[serde(default = "default_grid_side")]
    default_rows: usize,

    /// Default grid width offered by the create form.
    #[serde(default = "default_grid_side")]
    default_cols: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_db_path() -> String {
    "nonogram_studio.db".to_string()
}

fn default_server_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_grid_side() -> usize {
    5
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_path: default_db_path(),
            server_url: default_server_url(),
            default_rows: default_grid_side(),
            default_cols: default_grid_side(),
        }
    }
}

impl StudioConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
