//! Server configuration.
//!
//! Loaded from a TOML file; the path comes from the `LITMAP_CONFIG`
//! environment variable, falling back to `./litmap.toml`, falling back to
//! built-in defaults when neither exists. Every field carries a serde
//! default so partial files are valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LitmapError, Result};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "LITMAP_CONFIG";

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "litmap.toml";

/// Complete server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path of the precomputed publication table artifact.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/publications.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            dataset_path: default_dataset_path(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LitmapError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            LitmapError::Config(format!("invalid config {}: {}", path.display(), e))
        })
    }

    /// Resolve configuration: `LITMAP_CONFIG`, then `./litmap.toml`, then
    /// the built-in defaults.
    pub fn from_env_or_default() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }
        Ok(Self::default())
    }
}
