//! Web frontend: a static page backed by a small JSON API.
//!
//! The round lifecycle spans two requests — start and stop — correlated by
//! a per-player entry in the round map. Between the two, the process serves
//! other players; the stores and maps are shared and safe for concurrent
//! handlers. An abandoned round simply stays in the map and never produces
//! a leaderboard entry.

use std::collections::HashMap;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use parking_lot::Mutex;

use crate::game::RoundSession;
use crate::store::{Leaderboard, SettingsStore};

pub mod handlers;

use handlers::ResultPayload;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub leaderboard: Arc<Leaderboard>,
    pub settings: Arc<SettingsStore>,
    /// In-flight rounds keyed by player name
    pub rounds: Arc<Mutex<HashMap<String, RoundSession>>>,
    /// Last finished result per player, until cleared
    pub results: Arc<Mutex<HashMap<String, ResultPayload>>>,
}

impl AppState {
    pub fn new(leaderboard: Leaderboard, settings: SettingsStore) -> AppState {
        AppState {
            leaderboard: Arc::new(leaderboard),
            settings: Arc::new(settings),
            rounds: Arc::new(Mutex::new(HashMap::new())),
            results: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::serve_index))
        .route("/health", get(handlers::health_check))
        .route("/api/register", post(handlers::register))
        .route("/api/start", post(handlers::start_round))
        .route("/api/stop", post(handlers::stop_round))
        .route("/api/clear", post(handlers::clear_result))
        .route("/api/state", get(handlers::get_state))
        .route(
            "/api/settings",
            get(handlers::get_settings).post(handlers::update_settings),
        )
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .with_state(state)
}
