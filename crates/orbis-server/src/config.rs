//! Service configuration loaded from `orbis-config.yaml`.
//!
//! Every field has a default, so a partial file (or no file at all) yields
//! a usable [`ApiConfig`]. A small set of environment variables override
//! the file after it is parsed:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `ORBIS_HOST` | `server.host` |
//! | `ORBIS_PORT` | `server.port` |
//! | `ORBIS_MAX_LOOKUP_SIZE` | `behaviour.max_lookup_size` |
//! | `ORBIS_WORLD_SNAPSHOT` | `world.snapshot_path` |

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse the YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Batch behaviour.
    #[serde(default)]
    pub behaviour: BehaviourSection,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingSection,

    /// World snapshot source.
    #[serde(default)]
    pub world: WorldSection,
}

impl ApiConfig {
    /// Load configuration from a YAML file, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override fields from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Override fields from `lookup`, which maps a variable name to its
    /// value. Numeric values that fail to parse are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ORBIS_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("ORBIS_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!(value = %val, error = %e, "Ignoring invalid ORBIS_PORT"),
            }
        }
        if let Some(val) = lookup("ORBIS_MAX_LOOKUP_SIZE") {
            match val.parse() {
                Ok(size) => self.behaviour.max_lookup_size = size,
                Err(e) => warn!(value = %val, error = %e, "Ignoring invalid ORBIS_MAX_LOOKUP_SIZE"),
            }
        }
        if let Some(val) = lookup("ORBIS_WORLD_SNAPSHOT") {
            self.world.snapshot_path = PathBuf::from(val);
        }
    }
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Batch behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BehaviourSection {
    /// Maximum number of elements processed per batch; the rest are
    /// dropped from the response.
    #[serde(default = "default_max_lookup_size")]
    pub max_lookup_size: usize,
}

impl Default for BehaviourSection {
    fn default() -> Self {
        Self {
            max_lookup_size: default_max_lookup_size(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is unset (e.g. `info`, `orbis_query=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// World snapshot source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldSection {
    /// JSON or YAML snapshot, chosen by extension.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

const fn default_max_lookup_size() -> usize {
    orbis_api::DEFAULT_MAX_LOOKUP_SIZE
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("world.json")
}
