// SPDX-License-Identifier: MIT

//! Profile endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_profile_embeds_account_and_team_name() {
    let (app, _state) = common::create_test_app();

    let account_id = common::register_user(&app, "ironman", "ironman@marvel.com").await;
    let team = common::body_json(
        common::send_json(&app, "POST", "/api/teams", json!({"name": "Team Marvel"})).await,
    )
    .await;
    let team_id = team["id"].as_i64().unwrap();

    let profiles = common::body_json(common::send(&app, "GET", "/api/profiles").await).await;
    let profile_id = profiles.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let response = common::send_json(
        &app,
        "PUT",
        &format!("/api/profiles/{profile_id}"),
        json!({"team_id": team_id, "bio": "Genius billionaire philanthropist"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = common::body_json(response).await;
    assert_eq!(updated["account"]["id"].as_i64(), Some(account_id));
    assert_eq!(updated["account"]["username"], "ironman");
    assert_eq!(updated["team_name"], "Team Marvel");
    assert_eq!(updated["bio"], "Genius billionaire philanthropist");
}

#[tokio::test]
async fn test_profiles_by_team_filters_membership() {
    let (app, _state) = common::create_test_app();

    common::register_user(&app, "ironman", "ironman@marvel.com").await;
    common::register_user(&app, "batman", "batman@dc.com").await;
    let team = common::body_json(
        common::send_json(&app, "POST", "/api/teams", json!({"name": "Team DC"})).await,
    )
    .await;
    let team_id = team["id"].as_i64().unwrap();

    // Only Bruce joins
    let profiles = common::body_json(common::send(&app, "GET", "/api/profiles").await).await;
    let bruce_profile = profiles
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["account"]["username"] == "batman")
        .unwrap()["id"]
        .as_i64()
        .unwrap();
    common::send_json(
        &app,
        "PUT",
        &format!("/api/profiles/{bruce_profile}"),
        json!({"team_id": team_id}),
    )
    .await;

    let response =
        common::send(&app, "GET", &format!("/api/profiles/by_team?team_id={team_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let members = common::body_json(response).await;
    let members = members.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["account"]["username"], "batman");
}

#[tokio::test]
async fn test_by_team_requires_team_id() {
    let (app, _state) = common::create_test_app();

    let response = common::send(&app, "GET", "/api/profiles/by_team").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = common::send(&app, "GET", "/api/profiles/by_team?team_id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_team_filter_returns_empty_list() {
    let (app, _state) = common::create_test_app();

    common::register_user(&app, "ironman", "ironman@marvel.com").await;

    let response = common::send(&app, "GET", "/api/profiles/by_team?team_id=9999").await;
    assert_eq!(response.status(), StatusCode::OK);
    let members = common::body_json(response).await;
    assert_eq!(members.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_second_profile_for_account_rejected() {
    let (app, _state) = common::create_test_app();

    let account_id = common::register_user(&app, "ironman", "ironman@marvel.com").await;

    // Registration already created the account's profile
    let response = common::send_json(
        &app,
        "POST",
        "/api/profiles",
        json!({"account_id": account_id, "email": "second@marvel.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_counters_are_updatable() {
    let (app, _state) = common::create_test_app();

    common::register_user(&app, "ironman", "ironman@marvel.com").await;
    let profiles = common::body_json(common::send(&app, "GET", "/api/profiles").await).await;
    let profile_id = profiles.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let response = common::send_json(
        &app,
        "PUT",
        &format!("/api/profiles/{profile_id}"),
        json!({"total_calories_burned": 1200.5, "total_distance": 42.2, "total_workouts": 7}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = common::body_json(response).await;
    assert_eq!(updated["total_workouts"], 7);
    assert_eq!(updated["total_distance"], 42.2);
}
