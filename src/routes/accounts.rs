// SPDX-License-Identifier: MIT

//! Account endpoints, including registration.

use crate::error::{AppError, Result};
use crate::models::{Account, AccountPatch, NewAccount, Registration};
use crate::services::password::hash_password;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_accounts).post(create_account))
        .route("/api/users/register", post(register))
        .route(
            "/api/users/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
}

async fn list_accounts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Account>>> {
    Ok(Json(state.db.list_accounts()?))
}

/// Create a bare account. Unlike [`register`], this does not create a profile
/// or leaderboard entry.
async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAccount>,
) -> Result<(StatusCode, Json<Account>)> {
    payload.validate().map_err(AppError::validation)?;
    let password_hash = match &payload.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };
    let account = state
        .db
        .create_account(&payload, password_hash.as_deref())?;
    tracing::info!(account_id = account.id, "Created account");
    Ok((StatusCode::CREATED, Json(account)))
}

/// Register a new user.
///
/// Creates the account plus its empty profile and zero-valued leaderboard
/// entry in one transaction; a failure leaves no partial records behind.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Registration>,
) -> Result<(StatusCode, Json<Account>)> {
    payload.validate().map_err(AppError::validation)?;
    let password_hash = hash_password(&payload.password)?;
    let account = state.db.register_account(&payload, &password_hash)?;
    tracing::info!(account_id = account.id, username = %account.username, "Registered user");
    Ok((StatusCode::CREATED, Json(account)))
}

async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Account>> {
    let account = state
        .db
        .get_account(id)?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(account))
}

async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<AccountPatch>,
) -> Result<Json<Account>> {
    patch.validate().map_err(AppError::validation)?;
    let account = state
        .db
        .update_account(id, &patch)?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(account))
}

/// Delete an account and, via schema cascades, its profile, activities and
/// leaderboard entry.
async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if state.db.delete_account(id)? {
        tracing::info!(account_id = id, "Deleted account");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("User {id} not found")))
    }
}
