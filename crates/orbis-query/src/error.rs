//! Error types for the lookup framework.
//!
//! [`QueryError`] covers every way a single query element can fail to
//! become a rendered result. Inside a batch these are absorbed into a
//! `null`; single-object callers decide how to surface them.

use orbis_types::UnknownLinkType;

/// Failures while parsing, resolving, or serializing one query element.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The element must be a JSON string.
    #[error("query value is not a string")]
    NotAString,

    /// The element must be a JSON object.
    #[error("query value is not a JSON object")]
    NotAnObject,

    /// A required field is absent from a structured element.
    #[error("query object is missing '{0}'")]
    MissingField(&'static str),

    /// A field is present but has the wrong JSON type.
    #[error("query object has an invalid '{0}'")]
    InvalidField(&'static str),

    /// The `type` of a link query is not a known link type.
    #[error("{0}")]
    UnknownLinkType(#[from] UnknownLinkType),

    /// A Discord target is not a 17 to 19 digit snowflake.
    #[error("{0} is not a valid Discord ID")]
    InvalidSnowflake(String),

    /// A Minecraft target is not a UUID.
    #[error("{0} is not a valid Minecraft UUID")]
    InvalidUuid(String),

    /// The provider backing this resource is not installed.
    #[error("{0} provider is not available")]
    Unavailable(&'static str),

    /// The rendered view could not be converted to JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QueryError {
    /// Whether the error was caused by the caller's input rather than the
    /// server's configuration.
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Unavailable(_) | Self::Serialization(_))
    }
}

/// Failures reported by a skill progression provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    /// The provider's backing store could not be reached.
    #[error("skill store unavailable: {0}")]
    Unavailable(String),

    /// The provider returned data it could not interpret.
    #[error("malformed skill data: {0}")]
    Malformed(String),
}

/// Failures while loading a world snapshot into the in-memory provider.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read world snapshot {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON for a world fixture.
    #[error("invalid JSON world snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot is not valid YAML for a world fixture.
    #[error("invalid YAML world snapshot: {0}")]
    Yaml(#[from] serde_yml::Error),
}
