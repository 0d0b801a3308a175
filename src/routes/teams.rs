// SPDX-License-Identifier: MIT

//! Team endpoints.

use crate::error::{AppError, Result};
use crate::models::{NewTeam, Team, TeamPatch};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/teams", get(list_teams).post(create_team))
        .route(
            "/api/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
}

async fn list_teams(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Team>>> {
    Ok(Json(state.db.list_teams()?))
}

async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTeam>,
) -> Result<(StatusCode, Json<Team>)> {
    payload.validate().map_err(AppError::validation)?;
    let team = state.db.create_team(&payload)?;
    tracing::info!(team_id = team.id, name = %team.name, "Created team");
    Ok((StatusCode::CREATED, Json(team)))
}

async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Team>> {
    let team = state
        .db
        .get_team(id)?
        .ok_or_else(|| AppError::NotFound(format!("Team {id} not found")))?;
    Ok(Json(team))
}

async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<TeamPatch>,
) -> Result<Json<Team>> {
    patch.validate().map_err(AppError::validation)?;
    let team = state
        .db
        .update_team(id, &patch)?
        .ok_or_else(|| AppError::NotFound(format!("Team {id} not found")))?;
    Ok(Json(team))
}

async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.db.delete_team(id)? {
        tracing::info!(team_id = id, "Deleted team");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Team {id} not found")))
    }
}
