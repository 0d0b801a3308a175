// SPDX-License-Identifier: MIT

//! Workout plan endpoints.

use crate::error::{AppError, Result};
use crate::models::{Difficulty, NewWorkout, Workout, WorkoutPatch};
use crate::routes::require_param;
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
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/by_difficulty", get(workouts_by_difficulty))
        .route("/api/workouts/recommendations", get(recommendations))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Workout>>> {
    Ok(Json(state.db.list_workouts()?))
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewWorkout>,
) -> Result<(StatusCode, Json<Workout>)> {
    payload.validate().map_err(AppError::validation)?;
    let workout = state.db.create_workout(&payload)?;
    tracing::info!(workout_id = workout.id, name = %workout.name, "Created workout plan");
    Ok((StatusCode::CREATED, Json(workout)))
}

#[derive(Deserialize)]
struct DifficultyQuery {
    difficulty: Option<String>,
}

fn parse_difficulty(raw: &str) -> Result<Difficulty> {
    Difficulty::parse(raw).ok_or_else(|| AppError::BadRequest(format!("Invalid difficulty: {raw}")))
}

/// Workout plans at one difficulty level.
async fn workouts_by_difficulty(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DifficultyQuery>,
) -> Result<Json<Vec<Workout>>> {
    let raw = require_param(params.difficulty, "difficulty")?;
    let difficulty = parse_difficulty(&raw)?;
    tracing::debug!(difficulty = difficulty.as_str(), "Fetching workouts by difficulty");
    Ok(Json(state.db.workouts_by_difficulty(difficulty)?))
}

/// Recommended workout plans: by difficulty, defaulting to beginner.
async fn recommendations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DifficultyQuery>,
) -> Result<Json<Vec<Workout>>> {
    let difficulty = match params.difficulty.as_deref() {
        Some(raw) if !raw.is_empty() => parse_difficulty(raw)?,
        _ => Difficulty::Beginner,
    };
    tracing::debug!(difficulty = difficulty.as_str(), "Fetching workout recommendations");
    Ok(Json(state.db.workouts_by_difficulty(difficulty)?))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Workout>> {
    let workout = state
        .db
        .get_workout(id)?
        .ok_or_else(|| AppError::NotFound(format!("Workout {id} not found")))?;
    Ok(Json(workout))
}

async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<WorkoutPatch>,
) -> Result<Json<Workout>> {
    patch.validate().map_err(AppError::validation)?;
    let workout = state
        .db
        .update_workout(id, &patch)?
        .ok_or_else(|| AppError::NotFound(format!("Workout {id} not found")))?;
    Ok(Json(workout))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.db.delete_workout(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Workout {id} not found")))
    }
}
