//! Integration tests for the splitsec-web JSON API
//!
//! Exercises the round lifecycle (register, start, stop, clear), settings
//! validation, and the leaderboard view through the router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use splitsec::store::{Leaderboard, SettingsStore};
use splitsec::web::{build_router, AppState};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: app backed by stores in a fresh temp directory
fn setup_app() -> (axum::Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let leaderboard = Leaderboard::open(dir.path().join("leaderboard.jsonl"));
    let settings = SettingsStore::open(
        dir.path().join("settings.json"),
        dir.path().join("global_settings.json"),
    );
    let state = AppState::new(leaderboard, settings);
    (build_router(state), dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (app, _dir) = setup_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "splitsec-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn register_trims_and_validates_names() {
    let (app, _dir) = setup_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/register", json!({"player": "  ada  "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["player"], "ada");

    let response = app
        .clone()
        .oneshot(post_json("/api/register", json!({"player": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let long_name = "x".repeat(21);
    let response = app
        .oneshot(post_json("/api/register", json!({"player": long_name})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn start_uses_the_global_target() {
    let (app, _dir) = setup_app();

    let response = app
        .oneshot(post_json("/api/start", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["target"], 5.0);
    assert_eq!(body["mode"], "hidden");
}

#[tokio::test]
async fn a_round_lands_on_the_leaderboard_without_difficulty() {
    let (app, _dir) = setup_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/start", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json("/api/stop", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let result = extract_json(response.into_body()).await;
    assert_eq!(result["target"], 5.0);
    assert!(result["elapsed"].as_f64().unwrap() > 0.0);
    assert!(result["difference"].as_f64().unwrap() >= 0.0);
    assert!(result["tier"].is_string());

    let response = app.oneshot(get("/api/leaderboard")).await.unwrap();
    let board = extract_json(response.into_body()).await;
    let entries = board.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["player"], "ada");
    assert!(entries[0].get("difficulty").is_none());
    assert_eq!(entries[0]["mode"], "hidden");
}

#[tokio::test]
async fn stop_without_start_is_a_conflict() {
    let (app, _dir) = setup_app();

    let response = app
        .oneshot(post_json("/api/stop", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn stopping_twice_needs_a_second_start() {
    let (app, _dir) = setup_app();

    app.clone()
        .oneshot(post_json("/api/start", json!({"player": "ada"})))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_json("/api/stop", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json("/api/stop", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn rounds_are_tracked_per_player() {
    let (app, _dir) = setup_app();

    app.clone()
        .oneshot(post_json("/api/start", json!({"player": "ada"})))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json("/api/start", json!({"player": "grace"})))
        .await
        .unwrap();

    // Stopping one player's round leaves the other's running
    let response = app
        .clone()
        .oneshot(post_json("/api/stop", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get("/api/state?player=grace"))
        .await
        .unwrap();
    let state = extract_json(response.into_body()).await;
    assert_eq!(state["playing"], true);

    let response = app
        .oneshot(post_json("/api/stop", json!({"player": "grace"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn state_reports_results_until_cleared() {
    let (app, _dir) = setup_app();

    app.clone()
        .oneshot(post_json("/api/start", json!({"player": "ada"})))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json("/api/stop", json!({"player": "ada"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/state?player=ada"))
        .await
        .unwrap();
    let state = extract_json(response.into_body()).await;
    assert_eq!(state["playing"], false);
    assert!(state["result"].is_object());

    let response = app
        .clone()
        .oneshot(post_json("/api/clear", json!({"player": "ada"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/api/state?player=ada")).await.unwrap();
    let state = extract_json(response.into_body()).await;
    assert!(state["result"].is_null());
}

#[tokio::test]
async fn settings_round_trip_through_the_api() {
    let (app, _dir) = setup_app();

    let response = app.clone().oneshot(get("/api/settings")).await.unwrap();
    let settings = extract_json(response.into_body()).await;
    assert_eq!(settings["target_time"], 5.0);
    assert_eq!(settings["mode"], "hidden");

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/settings",
            json!({"target_time": 7.5, "mode": "visible"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/settings")).await.unwrap();
    let settings = extract_json(response.into_body()).await;
    assert_eq!(settings["target_time"], 7.5);
    assert_eq!(settings["mode"], "visible");
}

#[tokio::test]
async fn invalid_settings_are_rejected_and_preserved() {
    let (app, _dir) = setup_app();

    app.clone()
        .oneshot(post_json(
            "/api/settings",
            json!({"target_time": 7.5, "mode": "visible"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/settings",
            json!({"target_time": -1.0, "mode": "visible"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/settings",
            json!({"target_time": 3.0, "mode": "translucent"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.oneshot(get("/api/settings")).await.unwrap();
    let settings = extract_json(response.into_body()).await;
    assert_eq!(settings["target_time"], 7.5);
    assert_eq!(settings["mode"], "visible");
}

#[tokio::test]
async fn leaderboard_endpoint_ranks_ascending() {
    let (app, _dir) = setup_app();

    for player in ["ada", "grace", "edsger"] {
        app.clone()
            .oneshot(post_json("/api/start", json!({"player": player})))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json("/api/stop", json!({"player": player})))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/api/leaderboard")).await.unwrap();
    let board = extract_json(response.into_body()).await;
    let scores: Vec<f64> = board
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["score"].as_f64().unwrap())
        .collect();
    assert_eq!(scores.len(), 3);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn index_serves_the_page() {
    let (app, _dir) = setup_app();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("splitsec"));
}
