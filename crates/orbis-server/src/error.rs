//! Error types for the query server binary.
//!
//! [`AppError`] wraps every failure that can stop the service before or
//! while it serves requests.

/// Top-level error for the query server binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The world snapshot exists but could not be loaded.
    #[error("snapshot error: {source}")]
    Snapshot {
        /// The underlying snapshot error.
        #[from]
        source: orbis_query::SnapshotError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: orbis_api::ServerError,
    },
}
