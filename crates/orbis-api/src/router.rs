//! Axum router construction for the query API.
//!
//! Assembles every resource route into a single [`Router`] with CORS
//! middleware enabled for browser clients and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the query server.
///
/// The router includes:
/// - `GET /` -- server status
/// - `GET|POST /players`, `GET /players/{id}`, `GET /players/{id}/skills`
/// - `GET|POST /towns`, `GET /towns/{id}`
/// - `GET|POST /nations`, `GET /nations/{id}`
/// - `POST /discord` -- account links
/// - `POST /skills` -- skill progression
///
/// Unknown routes answer with a JSON 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status
        .route("/", get(handlers::server_status))
        // Registry
        .route(
            "/players",
            get(handlers::list_players).post(handlers::lookup_players),
        )
        .route("/players/{id}", get(handlers::get_player))
        .route("/players/{id}/skills", get(handlers::get_player_skills))
        .route(
            "/towns",
            get(handlers::list_towns).post(handlers::lookup_towns),
        )
        .route("/towns/{id}", get(handlers::get_town))
        .route(
            "/nations",
            get(handlers::list_nations).post(handlers::lookup_nations),
        )
        .route("/nations/{id}", get(handlers::get_nation))
        // Integrations
        .route("/discord", post(handlers::lookup_discord))
        .route("/skills", post(handlers::lookup_skills))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
