// SPDX-License-Identifier: MIT

//! Leaderboard endpoints.
//!
//! Listings come back ordered by total points, highest first. The stored
//! `rank` field is display data maintained by updates, never recomputed here.

use crate::error::{AppError, Result};
use crate::models::{LeaderboardEntry, LeaderboardPatch, NewLeaderboardEntry};
use crate::routes::parse_id_param;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/leaderboards",
            get(list_entries).post(create_entry),
        )
        .route("/api/leaderboards/rankings", get(rankings))
        .route("/api/leaderboards/by_team", get(leaderboard_by_team))
        .route(
            "/api/leaderboards/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
}

async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    Ok(Json(state.db.list_leaderboard_entries()?))
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewLeaderboardEntry>,
) -> Result<(StatusCode, Json<LeaderboardEntry>)> {
    payload.validate().map_err(AppError::validation)?;
    let entry = state.db.create_leaderboard_entry(&payload)?;
    tracing::info!(entry_id = entry.id, account_id = entry.account_id, "Created leaderboard entry");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Global rankings: every entry, sorted by total points descending.
async fn rankings(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LeaderboardEntry>>> {
    tracing::debug!("Fetching global rankings");
    Ok(Json(state.db.list_leaderboard_entries()?))
}

#[derive(Deserialize)]
struct ByTeamQuery {
    team_id: Option<String>,
}

/// One team's rankings.
async fn leaderboard_by_team(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByTeamQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    let team_id = parse_id_param(params.team_id, "team_id")?;
    tracing::debug!(team_id, "Fetching leaderboard by team");
    Ok(Json(state.db.leaderboard_by_team(team_id)?))
}

async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<LeaderboardEntry>> {
    let entry = state
        .db
        .get_leaderboard_entry(id)?
        .ok_or_else(|| AppError::NotFound(format!("Leaderboard entry {id} not found")))?;
    Ok(Json(entry))
}

async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<LeaderboardPatch>,
) -> Result<Json<LeaderboardEntry>> {
    patch.validate().map_err(AppError::validation)?;
    let entry = state
        .db
        .update_leaderboard_entry(id, &patch)?
        .ok_or_else(|| AppError::NotFound(format!("Leaderboard entry {id} not found")))?;
    Ok(Json(entry))
}

async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.db.delete_leaderboard_entry(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Leaderboard entry {id} not found")))
    }
}
