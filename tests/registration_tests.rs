// SPDX-License-Identifier: MIT

//! Registration tests: the three-record transactional contract.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_registration_creates_account_profile_and_leaderboard_entry() {
    let (app, _state) = common::create_test_app();

    let account_id = common::register_user(&app, "batman", "batman@dc.com").await;

    // Exactly one profile, tied to the account, with the email copied over
    let profiles = common::body_json(common::send(&app, "GET", "/api/profiles").await).await;
    let profiles = profiles.as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["account"]["id"].as_i64().unwrap(), account_id);
    assert_eq!(profiles[0]["account"]["username"], "batman");
    assert_eq!(profiles[0]["email"], "batman@dc.com");
    assert!(profiles[0]["team_id"].is_null());

    // Exactly one zero-valued leaderboard entry
    let entries = common::body_json(common::send(&app, "GET", "/api/leaderboards").await).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["account_id"].as_i64().unwrap(), account_id);
    assert_eq!(entries[0]["total_points"], 0);
    assert_eq!(entries[0]["total_activities"], 0);
    assert_eq!(entries[0]["rank"], 0);
}

#[tokio::test]
async fn test_registration_rejects_duplicate_username() {
    let (app, _state) = common::create_test_app();

    common::register_user(&app, "ironman", "ironman@marvel.com").await;

    let response = common::send_json(
        &app,
        "POST",
        "/api/users/register",
        json!({
            "username": "ironman",
            "email": "other@marvel.com",
            "password": "secret",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let accounts = common::body_json(common::send(&app, "GET", "/api/users").await).await;
    assert_eq!(accounts.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_registration_leaves_no_partial_records() {
    let (app, _state) = common::create_test_app();

    common::register_user(&app, "thor", "thor@marvel.com").await;

    // Same email but a fresh username: the account insert succeeds, the
    // profile insert hits the unique email constraint, and the whole
    // transaction must roll back.
    let response = common::send_json(
        &app,
        "POST",
        "/api/users/register",
        json!({
            "username": "loki",
            "email": "thor@marvel.com",
            "password": "secret",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let accounts = common::body_json(common::send(&app, "GET", "/api/users").await).await;
    assert_eq!(accounts.as_array().unwrap().len(), 1);
    let profiles = common::body_json(common::send(&app, "GET", "/api/profiles").await).await;
    assert_eq!(profiles.as_array().unwrap().len(), 1);
    let entries = common::body_json(common::send(&app, "GET", "/api/leaderboards").await).await;
    assert_eq!(entries.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_password_never_serialized() {
    let (app, _state) = common::create_test_app();

    let response = common::send_json(
        &app,
        "POST",
        "/api/users/register",
        json!({
            "username": "blackwidow",
            "email": "blackwidow@marvel.com",
            "password": "redledger",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = common::body_json(response).await;
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let id = created["id"].as_i64().unwrap();
    let fetched = common::body_json(common::send(&app, "GET", &format!("/api/users/{id}")).await).await;
    assert!(fetched.get("password_hash").is_none());
}

#[tokio::test]
async fn test_bare_account_create_skips_profile_and_leaderboard() {
    let (app, _state) = common::create_test_app();

    let response = common::send_json(
        &app,
        "POST",
        "/api/users",
        json!({"username": "jarvis", "email": "jarvis@marvel.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let profiles = common::body_json(common::send(&app, "GET", "/api/profiles").await).await;
    assert_eq!(profiles.as_array().unwrap().len(), 0);
    let entries = common::body_json(common::send(&app, "GET", "/api/leaderboards").await).await;
    assert_eq!(entries.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_registration_requires_password() {
    let (app, _state) = common::create_test_app();

    let response = common::send_json(
        &app,
        "POST",
        "/api/users/register",
        json!({"username": "hawkeye", "email": "hawkeye@marvel.com"}),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_registration_rejects_bad_email() {
    let (app, _state) = common::create_test_app();

    let response = common::send_json(
        &app,
        "POST",
        "/api/users/register",
        json!({"username": "vision", "email": "not-an-email", "password": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
