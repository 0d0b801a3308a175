// SPDX-License-Identifier: MIT

//! Activity endpoints.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityPatch, ActivityType, NewActivity};
use crate::routes::{parse_id_param, require_param};
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
        .route("/api/activities", get(list_activities).post(create_activity))
        .route("/api/activities/by_user", get(activities_by_user))
        .route("/api/activities/by_type", get(activities_by_type))
        .route(
            "/api/activities/{id}",
            get(get_activity)
                .put(update_activity)
                .delete(delete_activity),
        )
}

/// All activities, most recent first.
async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    Ok(Json(state.db.list_activities()?))
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewActivity>,
) -> Result<(StatusCode, Json<Activity>)> {
    payload.validate().map_err(AppError::validation)?;
    let activity = state.db.create_activity(&payload)?;
    tracing::info!(
        activity_id = activity.id,
        account_id = activity.account_id,
        activity_type = activity.activity_type.as_str(),
        "Logged activity"
    );
    Ok((StatusCode::CREATED, Json(activity)))
}

#[derive(Deserialize)]
struct ByUserQuery {
    user_id: Option<String>,
}

/// Activities for one account. An unknown account id yields an empty list.
async fn activities_by_user(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByUserQuery>,
) -> Result<Json<Vec<Activity>>> {
    let account_id = parse_id_param(params.user_id, "user_id")?;
    tracing::debug!(account_id, "Fetching activities by user");
    Ok(Json(state.db.activities_by_account(account_id)?))
}

#[derive(Deserialize)]
struct ByTypeQuery {
    #[serde(rename = "type")]
    activity_type: Option<String>,
}

/// Activities of one type.
async fn activities_by_type(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ByTypeQuery>,
) -> Result<Json<Vec<Activity>>> {
    let raw = require_param(params.activity_type, "type")?;
    let activity_type = ActivityType::parse(&raw)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid activity type: {raw}")))?;
    tracing::debug!(activity_type = activity_type.as_str(), "Fetching activities by type");
    Ok(Json(state.db.activities_by_type(activity_type)?))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Activity>> {
    let activity = state
        .db
        .get_activity(id)?
        .ok_or_else(|| AppError::NotFound(format!("Activity {id} not found")))?;
    Ok(Json(activity))
}

async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<ActivityPatch>,
) -> Result<Json<Activity>> {
    patch.validate().map_err(AppError::validation)?;
    let activity = state
        .db
        .update_activity(id, &patch)?
        .ok_or_else(|| AppError::NotFound(format!("Activity {id} not found")))?;
    Ok(Json(activity))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.db.delete_activity(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Activity {id} not found")))
    }
}
