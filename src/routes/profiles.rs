// SPDX-License-Identifier: MIT

//! Profile endpoints.

use crate::error::{AppError, Result};
use crate::models::{NewProfile, Profile, ProfilePatch};
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
        .route("/api/profiles", get(list_profiles).post(create_profile))
        .route("/api/profiles/by_team", get(profiles_by_team))
        .route(
            "/api/profiles/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}

async fn list_profiles(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Profile>>> {
    Ok(Json(state.db.list_profiles()?))
}

async fn create_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewProfile>,
) -> Result<(StatusCode, Json<Profile>)> {
    payload.validate().map_err(AppError::validation)?;
    let profile = state.db.create_profile(&payload)?;
    tracing::info!(profile_id = profile.id, "Created profile");
    Ok((StatusCode::CREATED, Json(profile)))
}

#[derive(Deserialize)]
struct ByTeamQuery {
    team_id: Option<String>,
}

/// Profiles belonging to one team.
async fn profiles_by_team(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByTeamQuery>,
) -> Result<Json<Vec<Profile>>> {
    let team_id = parse_id_param(params.team_id, "team_id")?;
    tracing::debug!(team_id, "Fetching profiles by team");
    Ok(Json(state.db.profiles_by_team(team_id)?))
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Profile>> {
    let profile = state
        .db
        .get_profile(id)?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>> {
    patch.validate().map_err(AppError::validation)?;
    let profile = state
        .db
        .update_profile(id, &patch)?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    Ok(Json(profile))
}

async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.db.delete_profile(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Profile {id} not found")))
    }
}
