//! Configuration management.
//!
//! quayside configuration is loaded from multiple sources with the
//! following priority:
//!
//! 1. Environment variables (`QUAYSIDE_*`, `__` as section separator)
//! 2. Configuration file (`~/.config/quayside/config.toml`)
//! 3. Default values
//!
//! ## Example Configuration File
//!
//! ```toml
//! data_dir = "~/.quayside"
//!
//! [registry]
//! host = "registry.example.com"
//! group = "myorg"
//!
//! [api]
//! listen = "127.0.0.1:8642"
//!
//! [logging]
//! level = "info"
//! ```

use crate::error::{CoreError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// quayside configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data directory (project records, image snapshot).
    pub data_dir: PathBuf,
    /// Registry naming configuration.
    pub registry: RegistryConfig,
    /// HTTP API configuration.
    pub api: ApiConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            registry: RegistryConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Registry host and organizational group.
///
/// Together these form the `registry-host/group` prefix under which all
/// project images are namespaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry host (e.g. "registry.example.com").
    pub host: String,
    /// Organizational group (e.g. "myorg").
    pub group: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: "localhost:5000".to_string(),
            group: "quayside".to_string(),
        }
    }
}

/// HTTP API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address.
    pub listen: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8642".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default file location and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_path())
    }

    /// Loads configuration layered over a specific file.
    ///
    /// A missing file is not an error; the remaining sources still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("QUAYSIDE_").split("__"))
            .extract()
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Directory holding per-project records.
    #[must_use]
    pub fn projects_dir(&self) -> PathBuf {
        self.data_dir.join("projects")
    }

    /// Path of the optional image inventory snapshot.
    #[must_use]
    pub fn image_snapshot_path(&self) -> PathBuf {
        self.data_dir.join("images.toml")
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".quayside"))
        .unwrap_or_else(|| PathBuf::from("/var/lib/quayside"))
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("quayside").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("/etc/quayside/config.toml"))
}
