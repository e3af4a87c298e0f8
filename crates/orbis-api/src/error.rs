//! Error types for the query API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Batch
//! endpoints only ever fail on request framing; per-element failures
//! never reach this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orbis_query::QueryError;

/// Errors that can occur in the query API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is not a `{"query": [...]}` document.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A single-object lookup found nothing, or no route matched.
    #[error("not found: {0}")]
    NotFound(String),

    /// A single-object lookup failed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Query(QueryError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Query(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::InvalidRequest(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Query(e) => e.to_string(),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
