// In-process tests of GET /api/players through the full router.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use dota_players::api::create_router;
use dota_players::api::handlers::AppState;
use dota_players::directory::{Player, PlayerSource, StaticDirectory};

struct FailingDirectory;

impl PlayerSource for FailingDirectory {
    fn players(&self) -> Result<&[Player]> {
        Err(anyhow!("directory unavailable"))
    }
}

struct PanickingDirectory;

impl PlayerSource for PanickingDirectory {
    fn players(&self) -> Result<&[Player]> {
        panic!("directory exploded")
    }
}

fn router_with(source: Arc<dyn PlayerSource>) -> Router {
    create_router(Arc::new(AppState::new(source)))
}

async fn get_players(app: &Router) -> (StatusCode, Option<String>, Bytes) {
    let request = Request::builder()
        .uri("/api/players")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body)
}

#[tokio::test]
async fn test_success_envelope() {
    let app = router_with(Arc::new(StaticDirectory));

    let (status, content_type, body) = get_players(&app).await;
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 20);

    let first = &json["players"][0];
    assert_eq!(first["id"], "1");
    assert_eq!(first["name"], "Ame");
    assert_eq!(first["realName"], "Wang Chunyu");
    assert_eq!(first["team"], "Team Aster");
    assert_eq!(first["tournaments"][0]["name"], "DreamLeague Season 24");
    assert_eq!(first["tournaments"][0]["date"], "2025-03-15");
    assert_eq!(first["tournaments"][0]["tier"], 1);
}

#[tokio::test]
async fn test_count_matches_players_and_ids_unique() {
    let app = router_with(Arc::new(StaticDirectory));

    let (_, _, body) = get_players(&app).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    let players = json["players"].as_array().unwrap();

    assert_eq!(json["count"].as_u64().unwrap() as usize, players.len());
    let ids: HashSet<&str> = players.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), players.len());
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let app = router_with(Arc::new(StaticDirectory));

    let (_, _, first) = get_players(&app).await;
    let (_, _, second) = get_players(&app).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_requests_agree() {
    let app = router_with(Arc::new(StaticDirectory));

    let (a, b, c) = tokio::join!(get_players(&app), get_players(&app), get_players(&app));

    assert_eq!(a.2, b.2);
    assert_eq!(b.2, c.2);
}

#[tokio::test]
async fn test_source_error_becomes_failure_envelope() {
    let app = router_with(Arc::new(FailingDirectory));

    let (status, content_type, body) = get_players(&app).await;
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to fetch player data");
    assert!(json.get("players").is_none());
}

#[tokio::test]
async fn test_panic_becomes_failure_envelope() {
    let app = router_with(Arc::new(PanickingDirectory));

    let (status, _, body) = get_players(&app).await;
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to fetch player data");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = router_with(Arc::new(StaticDirectory));
    let request = Request::builder()
        .uri("/api/players/1")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
