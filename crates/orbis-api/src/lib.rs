//! HTTP query API for Orbis.
//!
//! This crate provides an Axum HTTP server that exposes the batch lookup
//! framework from `orbis-query`:
//!
//! - **Batch endpoints** (`POST /players`, `/towns`, `/nations`,
//!   `/discord`, `/skills`) taking `{"query": [...]}` and answering with
//!   one result (or `null`) per element, in order
//! - **List endpoints** (`GET /players`, `/towns`, `/nations`)
//! - **Single-object endpoints** (`GET /players/{id}` and friends)
//! - **Server status** (`GET /`)
//!
//! # Architecture
//!
//! Handlers run the pipelines held in [`AppState`] directly. Pipelines
//! read world state through the provider traits and hold no mutable
//! state, so requests never contend.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, DEFAULT_MAX_LOOKUP_SIZE};
