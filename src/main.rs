// SPDX-License-Identifier: MIT

//! TeamFit-Tracker API Server
//!
//! Tracks team fitness: user profiles, logged activities, leaderboards and
//! workout plans, served as a REST API over SQLite.

use std::sync::Arc;

use teamfit_tracker::{config::Config, db::SqliteDb, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting TeamFit-Tracker API");

    // Open (and initialize) the SQLite database
    let db = SqliteDb::open(&config.database_path).expect("Failed to open database");
    tracing::info!(path = %config.database_path.display(), "Database ready");

    // Build shared state
    let state = Arc::new(AppState { config, db });

    // Build router
    let app = teamfit_tracker::routes::create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("teamfit_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
