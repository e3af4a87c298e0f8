//! Query API binary for Orbis.
//!
//! Loads configuration, installs logging, reads the world snapshot and
//! serves the batch query API until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `orbis-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Load the world snapshot
//! 4. Build the provider set and pipelines
//! 5. Serve

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use orbis_api::{AppState, ServerConfig};
use orbis_query::InMemoryWorld;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{ApiConfig, LogFormat, LoggingSection};
use crate::error::AppError;

const CONFIG_PATH: &str = "orbis-config.yaml";

/// Application entry point for the query server.
///
/// # Errors
///
/// Returns an error if the configuration or snapshot cannot be read, or
/// the server cannot bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. The log format lives in the config, so this
    //    runs before any subscriber is installed.
    let (config, found) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("orbis-server starting");
    if !found {
        info!(path = CONFIG_PATH, "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        max_lookup_size = config.behaviour.max_lookup_size,
        snapshot = %config.world.snapshot_path.display(),
        "Configuration loaded"
    );

    // 3. Load the world snapshot.
    let world = load_world(&config.world.snapshot_path)?;

    // 4. Build pipelines.
    let providers = world.into_providers();
    let state = Arc::new(AppState::new(
        &providers,
        config.behaviour.max_lookup_size,
    ));

    // 5. Serve until Ctrl-C.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    orbis_api::start_server(&server_config, state)
        .await
        .map_err(AppError::from)?;

    info!("orbis-server stopped");
    Ok(())
}

/// Load `orbis-config.yaml` from the working directory, falling back to
/// defaults (plus environment overrides) when it does not exist.
fn load_config() -> Result<(ApiConfig, bool), AppError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((ApiConfig::from_file(config_path)?, true))
    } else {
        let mut config = ApiConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_logging(logging: &LoggingSection) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Load the snapshot at `path`. A missing file starts an empty world.
fn load_world(path: &Path) -> Result<InMemoryWorld, AppError> {
    if path.exists() {
        Ok(InMemoryWorld::from_file(path)?)
    } else {
        warn!(
            path = %path.display(),
            "World snapshot not found, serving an empty world"
        );
        Ok(InMemoryWorld::default())
    }
}
