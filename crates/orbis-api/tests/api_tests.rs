//! Integration tests for the query API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. The world comes from an in-memory snapshot.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use orbis_api::router::build_router;
use orbis_api::state::AppState;
use orbis_query::InMemoryWorld;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

const STEVE: Uuid = Uuid::from_u128(0x01);
const ALEX: Uuid = Uuid::from_u128(0x02);
const HARBOR: Uuid = Uuid::from_u128(0x11);
const MARSH: Uuid = Uuid::from_u128(0x12);
const COAST: Uuid = Uuid::from_u128(0x21);
const STEVE_DISCORD: &str = "222222222222222222";

fn world_document() -> Value {
    json!({
        "residents": [
            {
                "id": STEVE,
                "name": "Steve",
                "town": HARBOR,
                "registered": 1_600_000_000_000_i64,
                "joined_town_at": 1_600_000_000_000_i64,
                "is_online": true,
                "town_ranks": ["sheriff"]
            },
            {
                "id": ALEX,
                "name": "Alex",
                "title": "",
                "about": "",
                "registered": 1_610_000_000_000_i64
            }
        ],
        "towns": [
            {
                "id": HARBOR,
                "name": "Harbor",
                "mayor": STEVE,
                "nation": COAST,
                "num_town_blocks": 16,
                "max_town_blocks": 32,
                "residents": [STEVE]
            },
            {
                "id": MARSH,
                "name": "Marsh",
                "num_town_blocks": 4,
                "max_town_blocks": 8
            }
        ],
        "nations": [
            {
                "id": COAST,
                "name": "Coast",
                "capital": HARBOR,
                "towns": [HARBOR]
            }
        ],
        "town_ranks": ["sheriff"],
        "nation_ranks": [],
        "new_day_time": 43_200,
        "server": {
            "version": "1.21.4",
            "max_players": 50,
            "worlds": [
                { "name": "world", "environment": "NORMAL", "time": 1000, "moon_phase": "NEW_MOON" }
            ]
        },
        "economy": {
            "players": { (STEVE.to_string()): 42 }
        },
        "links": [
            { "discord_id": STEVE_DISCORD, "uuid": STEVE }
        ],
        "skills": {
            "catalog": {
                "skills": ["MINING", "ACROBATICS"],
                "gathering": ["MINING"],
                "misc": ["ACROBATICS"]
            },
            "profiles": {
                (STEVE.to_string()): {
                    "power_level": 7,
                    "skills": { "MINING": { "level": 7, "xp": 10, "xp_to_next_level": 90 } }
                }
            }
        }
    })
}

fn make_router_from(document: &Value, max_lookup_size: usize) -> Router {
    let world = InMemoryWorld::from_json_str(&document.to_string()).unwrap();
    let state = Arc::new(AppState::new(&world.into_providers(), max_lookup_size));
    build_router(state)
}

fn make_router() -> Router {
    make_router_from(&world_document(), 100)
}

fn make_bare_router() -> Router {
    let mut document = world_document();
    let object = document.as_object_mut().unwrap();
    object.remove("links");
    object.remove("skills");
    object.remove("economy");
    make_router_from(&document, 100)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(router: Router, path: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn post(router: Router, path: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::post(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn post_query(router: Router, path: &str, query: &Value) -> (StatusCode, Value) {
    post(router, path, &json!({ "query": query }).to_string()).await
}

// =========================================================================
// Server status
// =========================================================================

#[tokio::test]
async fn test_server_status() {
    let (status, json) = get(make_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["version"], "1.21.4");
    assert_eq!(json["moonPhase"], "NEW_MOON");
    assert_eq!(json["stats"]["maxPlayers"], 50);
    assert_eq!(json["stats"]["numResidents"], 2);
    assert_eq!(json["stats"]["numNomads"], 1);
    assert_eq!(json["stats"]["numTownBlocks"], 20);
    assert_eq!(json["timestamps"]["newDayTime"], 43_200);
    assert_eq!(json["seasons"]["worlds"], json!([]));
}

// =========================================================================
// Players
// =========================================================================

#[tokio::test]
async fn test_player_batch_mixed_elements() {
    let query = json!([STEVE.to_string(), "unknown_name", { "bad": "shape" }]);
    let (status, json) = post_query(make_router(), "/players", &query).await;

    assert_eq!(status, StatusCode::OK);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["name"], "Steve");
    assert_eq!(results[1], Value::Null);
    assert_eq!(results[2], Value::Null);
}

#[tokio::test]
async fn test_player_batch_is_capped() {
    let router = make_router_from(&world_document(), 2);
    let query = json!(["Steve", "Alex", "Steve", "Alex"]);
    let (status, json) = post_query(router, "/players", &query).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Steve", "Alex"]);
}

#[tokio::test]
async fn test_player_empty_strings_are_null() {
    let (_, json) = post_query(make_router(), "/players", &json!(["alex"])).await;

    assert_eq!(json[0]["title"], Value::Null);
    assert_eq!(json[0]["about"], Value::Null);
    assert_eq!(json[0]["town"], Value::Null);
    assert_eq!(json[0]["timestamps"]["joinedTownAt"], Value::Null);
}

#[tokio::test]
async fn test_player_balance() {
    let (_, json) = post_query(make_router(), "/players", &json!(["Steve", "Alex"])).await;
    assert_eq!(json[0]["stats"]["balance"], 42.0);
    assert_eq!(json[1]["stats"]["balance"], 0.0);

    let (_, json) = post_query(make_bare_router(), "/players", &json!(["Steve"])).await;
    assert_eq!(json[0]["stats"]["balance"], 0.0);
}

#[tokio::test]
async fn test_list_players() {
    let (status, json) = get(make_router(), "/players").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["status"]["isKing"], true);
}

#[tokio::test]
async fn test_get_player_by_name() {
    let (status, json) = get(make_router(), "/players/STEVE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uuid"], STEVE.to_string());
    assert_eq!(json["town"]["name"], "Harbor");
    assert_eq!(json["nation"]["name"], "Coast");
}

#[tokio::test]
async fn test_get_player_not_found() {
    let (status, json) = get(make_router(), "/players/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert!(json["error"].is_string());
}

// =========================================================================
// Towns and nations
// =========================================================================

#[tokio::test]
async fn test_town_list_matches_lookups() {
    let (status, list) = get(make_router(), "/towns").await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap().clone();
    assert_eq!(list.len(), 2);

    for town in list {
        let query = json!([town["uuid"].clone()]);
        let (_, lookup) = post_query(make_router(), "/towns", &query).await;
        assert_eq!(lookup, json!([town]));
    }
}

#[tokio::test]
async fn test_get_town() {
    let (status, json) = get(make_router(), &format!("/towns/{HARBOR}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"]["isCapital"], true);
    assert_eq!(json["residents"], json!(["Steve"]));
    assert_eq!(json["ranks"], json!({ "sheriff": ["Steve"] }));
}

#[tokio::test]
async fn test_nation_batch_and_single() {
    let (status, json) = post_query(make_router(), "/nations", &json!(["coast", "Atlantis"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["king"]["name"], "Steve");
    assert_eq!(json[1], Value::Null);

    let (status, json) = get(make_router(), "/nations/Coast").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["towns"], json!([{ "name": "Harbor", "uuid": HARBOR }]));

    let (_, json) = get(make_router(), "/nations").await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// =========================================================================
// Discord links
// =========================================================================

#[tokio::test]
async fn test_discord_unlinked_id() {
    let query = json!([{ "type": "discord", "target": "123456789012345678" }]);
    let (status, json) = post_query(make_router(), "/discord", &query).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([{ "id": "123456789012345678", "uuid": null }]));
}

#[tokio::test]
async fn test_discord_both_directions() {
    let query = json!([
        { "type": "DISCORD", "target": STEVE_DISCORD },
        { "type": "minecraft", "target": STEVE.to_string() },
        { "type": "minecraft", "target": "Steve" },
        { "type": "steam", "target": "1" }
    ]);
    let (_, json) = post_query(make_router(), "/discord", &query).await;

    let linked = json!({ "id": STEVE_DISCORD, "uuid": STEVE });
    assert_eq!(json, json!([linked, linked, null, null]));
}

#[tokio::test]
async fn test_discord_without_link_store_is_null() {
    let query = json!([{ "type": "discord", "target": STEVE_DISCORD }]);
    let (status, json) = post_query(make_bare_router(), "/discord", &query).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([null]));
}

// =========================================================================
// Skills
// =========================================================================

#[tokio::test]
async fn test_skills_batch() {
    let query = json!([
        { "player": "Steve", "all_skills": true },
        { "player": "Alex" },
        { "player": "nobody" },
        "Steve"
    ]);
    let (status, json) = post_query(make_router(), "/skills", &query).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["has_skill_data"], true);
    assert_eq!(json[0]["power_level"], 7);
    assert_eq!(json[0]["skills"]["ACROBATICS"]["level"], 0);
    assert_eq!(json[0]["categories"]["gathering"], json!(["MINING"]));
    assert_eq!(json[1]["has_skill_data"], false);
    assert_eq!(json[2], Value::Null);
    assert_eq!(json[3], Value::Null);
}

#[tokio::test]
async fn test_player_skills_path_lists_leveled_only() {
    let (status, json) = get(make_router(), "/players/Steve/skills").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["skills"], json!({ "MINING": { "level": 7, "xp": 10, "xp_to_next_level": 90 } }));
}

#[tokio::test]
async fn test_skills_without_store() {
    let (status, json) = get(make_bare_router(), "/players/Steve/skills").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["has_skill_data"], false);
    assert!(json["error"].is_string());
}

// =========================================================================
// Request framing
// =========================================================================

#[tokio::test]
async fn test_malformed_bodies_are_rejected() {
    for body in ["not json", "[]", r#"{"names": []}"#, r#"{"query": {}}"#] {
        let (status, json) = post(make_router(), "/players", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json["status"], 400);
    }
}

#[tokio::test]
async fn test_empty_query_is_empty() {
    let (status, json) = post_query(make_router(), "/towns", &json!([])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, json) = get(make_router(), "/villages").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}
