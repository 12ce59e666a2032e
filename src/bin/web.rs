//! splitsec-web - browser frontend for the timing game
//!
//! Serves the static page and JSON API on a local port. Rounds play against
//! the configured global target time rather than a difficulty tier.

use tracing::info;

use splitsec::constants::{GLOBAL_SETTINGS_FILE, LEADERBOARD_FILE, SETTINGS_FILE, WEB_BIND_ADDR};
use splitsec::store::{Leaderboard, SettingsStore};
use splitsec::web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting splitsec-web v{}", env!("CARGO_PKG_VERSION"));

    let leaderboard = Leaderboard::open(LEADERBOARD_FILE);
    let settings = SettingsStore::open(SETTINGS_FILE, GLOBAL_SETTINGS_FILE);
    let state = AppState::new(leaderboard, settings);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(WEB_BIND_ADDR).await?;
    info!("splitsec-web listening on http://{}", WEB_BIND_ADDR);

    axum::serve(listener, app).await?;

    Ok(())
}
