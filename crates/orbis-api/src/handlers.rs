//! REST endpoint handlers for the query API server.
//!
//! Every handler runs its pipeline to completion synchronously; providers
//! are plain reads, so nothing here awaits.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Server status |
//! | `GET` | `/players` | List all players |
//! | `POST` | `/players` | Batch player lookup |
//! | `GET` | `/players/{id}` | Single player |
//! | `GET` | `/players/{id}/skills` | Leveled skills of one player |
//! | `GET` | `/towns` | List all towns |
//! | `POST` | `/towns` | Batch town lookup |
//! | `GET` | `/towns/{id}` | Single town |
//! | `GET` | `/nations` | List all nations |
//! | `POST` | `/nations` | Batch nation lookup |
//! | `GET` | `/nations/{id}` | Single nation |
//! | `POST` | `/discord` | Batch account link lookup |
//! | `POST` | `/skills` | Batch skill lookup |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Uri;
use orbis_query::{BatchPipeline, LookupKey, Resource, SkillQuery, SkillSelection};
use orbis_types::ServerStatusView;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Extract the `query` array from a batch request body.
///
/// This is the only place a batch request can fail as a whole.
pub fn batch_query(body: &[u8]) -> Result<Vec<Value>, ApiError> {
    let document: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::InvalidRequest(format!("request body is not valid JSON: {e}")))?;

    let Value::Object(mut fields) = document else {
        return Err(ApiError::InvalidRequest(String::from(
            "request body must be a JSON object",
        )));
    };

    match fields.remove("query") {
        Some(Value::Array(query)) => Ok(query),
        Some(_) => Err(ApiError::InvalidRequest(String::from(
            "'query' must be an array",
        ))),
        None => Err(ApiError::InvalidRequest(String::from(
            "request body is missing 'query'",
        ))),
    }
}

fn run_batch<R: Resource>(
    pipeline: &BatchPipeline<R>,
    body: &[u8],
) -> Result<Json<Vec<Value>>, ApiError> {
    let query = batch_query(body)?;
    Ok(Json(pipeline.run(&query)))
}

fn run_single<R: Resource>(
    pipeline: &BatchPipeline<R>,
    id: &str,
) -> Result<Json<Value>, ApiError> {
    pipeline
        .lookup(&Value::String(id.to_owned()))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("{} '{id}' was not found", R::NAME)))
}

// ---------------------------------------------------------------------------
// GET / -- server status
// ---------------------------------------------------------------------------

/// Server-wide status snapshot.
pub async fn server_status(State(state): State<Arc<AppState>>) -> Json<ServerStatusView> {
    Json(state.status.render())
}

// ---------------------------------------------------------------------------
// /players
// ---------------------------------------------------------------------------

/// List every registered player.
pub async fn list_players(State(state): State<Arc<AppState>>) -> Json<Vec<Value>> {
    Json(state.player_list.run())
}

/// Look up a batch of players by name or UUID.
pub async fn lookup_players(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    run_batch(&state.players, &body)
}

/// Look up one player by name or UUID.
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    run_single(&state.players, &id)
}

/// Skills of one player with at least one level.
pub async fn get_player_skills(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let query = SkillQuery {
        player: LookupKey::from_identifier(&id),
        selection: SkillSelection::Leveled,
    };
    state
        .skills
        .lookup_key(&query)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("player '{id}' was not found")))
}

// ---------------------------------------------------------------------------
// /towns
// ---------------------------------------------------------------------------

/// List every town.
pub async fn list_towns(State(state): State<Arc<AppState>>) -> Json<Vec<Value>> {
    Json(state.town_list.run())
}

/// Look up a batch of towns by name or UUID.
pub async fn lookup_towns(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    run_batch(&state.towns, &body)
}

/// Look up one town by name or UUID.
pub async fn get_town(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    run_single(&state.towns, &id)
}

// ---------------------------------------------------------------------------
// /nations
// ---------------------------------------------------------------------------

/// List every nation.
pub async fn list_nations(State(state): State<Arc<AppState>>) -> Json<Vec<Value>> {
    Json(state.nation_list.run())
}

/// Look up a batch of nations by name or UUID.
pub async fn lookup_nations(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    run_batch(&state.nations, &body)
}

/// Look up one nation by name or UUID.
pub async fn get_nation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    run_single(&state.nations, &id)
}

// ---------------------------------------------------------------------------
// Integrations
// ---------------------------------------------------------------------------

/// Look up a batch of Discord/Minecraft account links.
pub async fn lookup_discord(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    run_batch(&state.discord, &body)
}

/// Look up a batch of player skill records.
pub async fn lookup_skills(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    run_batch(&state.skills, &body)
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// JSON 404 for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn batch_query_extracts_the_array() {
        let query = batch_query(br#"{"query": ["a", 1, null]}"#).unwrap();
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn batch_query_rejects_bad_framing() {
        for body in [
            &b"not json"[..],
            br#"["a"]"#,
            br#"{"names": []}"#,
            br#"{"query": "Alice"}"#,
        ] {
            assert!(matches!(batch_query(body), Err(ApiError::InvalidRequest(_))));
        }
    }
}
