use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::constants::LEADERBOARD_TOP_N;
use crate::error::Error;
use crate::game::{Mode, RoundResult, RoundSession};
use crate::store::{validate_player_name, GlobalSettings, ScoreEntry};
use crate::web::AppState;

const INDEX_HTML: &str = include_str!("index.html");

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "splitsec-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct PlayerRequest {
    pub player: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub player: String,
}

/// POST /api/register
///
/// Validates the name; the client keeps it as its session token.
pub async fn register(
    Json(req): Json<PlayerRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let player = validate_player_name(&req.player)?;
    Ok(Json(RegisterResponse {
        player: player.to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub target: f64,
    pub mode: Mode,
}

/// POST /api/start
///
/// Creates a round against the configured global target. A round already in
/// flight for this player is replaced and never scored.
pub async fn start_round(
    State(state): State<AppState>,
    Json(req): Json<PlayerRequest>,
) -> Result<Json<StartResponse>, ApiError> {
    let player = validate_player_name(&req.player)?.to_string();
    let global = state.settings.load_global();

    let session = RoundSession::begin(global.target_time);
    state.rounds.lock().insert(player.clone(), session);
    state.results.lock().remove(&player);
    info!(player = %player, target = global.target_time, "round started");

    Ok(Json(StartResponse {
        target: global.target_time,
        mode: global.mode,
    }))
}

/// Finished-round payload returned by stop and kept for the state endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ResultPayload {
    pub target: f64,
    pub elapsed: f64,
    pub difference: f64,
    pub tier: String,
}

impl From<RoundResult> for ResultPayload {
    fn from(result: RoundResult) -> Self {
        ResultPayload {
            target: result.target,
            elapsed: result.elapsed,
            difference: result.difference,
            tier: result.tier.token().to_string(),
        }
    }
}

/// POST /api/stop
///
/// Scores the player's in-flight round and appends it to the leaderboard.
/// A write failure propagates: the result is then not durably recorded.
pub async fn stop_round(
    State(state): State<AppState>,
    Json(req): Json<PlayerRequest>,
) -> Result<Json<ResultPayload>, ApiError> {
    let player = validate_player_name(&req.player)?.to_string();
    let session = state
        .rounds
        .lock()
        .remove(&player)
        .ok_or(ApiError::NoRound)?;

    let result = session.finish()?;
    let global = state.settings.load_global();
    let entry = ScoreEntry::new(&player, result.difference, None, global.mode)?;
    state.leaderboard.append(&entry)?;
    info!(player = %player, difference = result.difference, "round recorded");

    let payload = ResultPayload::from(result);
    state.results.lock().insert(player, payload.clone());
    Ok(Json(payload))
}

/// POST /api/clear
pub async fn clear_result(
    State(state): State<AppState>,
    Json(req): Json<PlayerRequest>,
) -> Result<StatusCode, ApiError> {
    let player = validate_player_name(&req.player)?;
    state.results.lock().remove(player);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub player: String,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub playing: bool,
    pub result: Option<ResultPayload>,
}

/// GET /api/state?player=
///
/// Lets a reloaded page pick up where it left off.
pub async fn get_state(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<StateResponse>, ApiError> {
    let player = validate_player_name(&query.player)?;
    Ok(Json(StateResponse {
        playing: state.rounds.lock().contains_key(player),
        result: state.results.lock().get(player).cloned(),
    }))
}

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<GlobalSettings> {
    Json(state.settings.load_global())
}

#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    pub target_time: f64,
    pub mode: String,
}

/// POST /api/settings
///
/// Fully overwrites the global record. Invalid input is rejected and the
/// stored settings remain in effect.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(req): Json<SettingsRequest>,
) -> Result<Json<GlobalSettings>, ApiError> {
    let mode = Mode::from_token(&req.mode)?;
    state.settings.save_global(req.target_time, mode)?;
    info!(target_time = req.target_time, %mode, "global settings updated");
    Ok(Json(state.settings.load_global()))
}

/// GET /api/leaderboard
pub async fn get_leaderboard(State(state): State<AppState>) -> Json<Vec<ScoreEntry>> {
    Json(state.leaderboard.top(LEADERBOARD_TOP_N))
}

/// Error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    /// Rejected input; stored state is untouched
    Invalid(String),
    /// Stop without a round in flight
    NoRound,
    /// Persistence or clock failure
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => ApiError::Invalid(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Invalid(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NoRound => (
                StatusCode::CONFLICT,
                "no round in progress".to_string(),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
