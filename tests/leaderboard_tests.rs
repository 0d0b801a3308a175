// SPDX-License-Identifier: MIT

//! Leaderboard ordering and filter tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

/// Find the leaderboard entry id for an account.
async fn entry_id_for(app: &axum::Router, account_id: i64) -> i64 {
    let entries = common::body_json(common::send(app, "GET", "/api/leaderboards").await).await;
    entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["account_id"].as_i64() == Some(account_id))
        .unwrap()["id"]
        .as_i64()
        .unwrap()
}

async fn set_points(app: &axum::Router, account_id: i64, points: i64) {
    let entry_id = entry_id_for(app, account_id).await;
    let response = common::send_json(
        app,
        "PUT",
        &format!("/api/leaderboards/{entry_id}"),
        json!({"total_points": points}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rankings_sorted_by_points_descending() {
    let (app, _state) = common::create_test_app();

    let a = common::register_user(&app, "ironman", "ironman@marvel.com").await;
    let b = common::register_user(&app, "batman", "batman@dc.com").await;
    let c = common::register_user(&app, "thor", "thor@marvel.com").await;

    set_points(&app, a, 100).await;
    set_points(&app, b, 500).await;
    set_points(&app, c, 300).await;

    let response = common::send(&app, "GET", "/api/leaderboards/rankings").await;
    assert_eq!(response.status(), StatusCode::OK);
    let rankings = common::body_json(response).await;
    let points: Vec<i64> = rankings
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["total_points"].as_i64().unwrap())
        .collect();
    assert_eq!(points, vec![500, 300, 100]);
}

#[tokio::test]
async fn test_ties_keep_insertion_order() {
    let (app, _state) = common::create_test_app();

    let a = common::register_user(&app, "ironman", "ironman@marvel.com").await;
    let b = common::register_user(&app, "batman", "batman@dc.com").await;

    set_points(&app, a, 300).await;
    set_points(&app, b, 300).await;

    let rankings =
        common::body_json(common::send(&app, "GET", "/api/leaderboards/rankings").await).await;
    let usernames: Vec<&str> = rankings
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["ironman", "batman"]);
}

#[tokio::test]
async fn test_rankings_by_team() {
    let (app, _state) = common::create_test_app();

    let team = common::body_json(
        common::send_json(&app, "POST", "/api/teams", json!({"name": "Team Marvel"})).await,
    )
    .await;
    let team_id = team["id"].as_i64().unwrap();

    let tony = common::register_user(&app, "ironman", "ironman@marvel.com").await;
    let bruce = common::register_user(&app, "batman", "batman@dc.com").await;

    // Only Tony joins the team
    let entry_id = entry_id_for(&app, tony).await;
    common::send_json(
        &app,
        "PUT",
        &format!("/api/leaderboards/{entry_id}"),
        json!({"team_id": team_id, "total_points": 800}),
    )
    .await;
    set_points(&app, bruce, 900).await;

    let response =
        common::send(&app, "GET", &format!("/api/leaderboards/by_team?team_id={team_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let entries = common::body_json(response).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["username"], "ironman");
    assert_eq!(entries[0]["team_name"], "Team Marvel");
}

#[tokio::test]
async fn test_by_team_requires_team_id() {
    let (app, _state) = common::create_test_app();

    let response = common::send(&app, "GET", "/api/leaderboards/by_team").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rank_is_not_recomputed_from_points() {
    let (app, _state) = common::create_test_app();

    let account_id = common::register_user(&app, "ironman", "ironman@marvel.com").await;
    let entry_id = entry_id_for(&app, account_id).await;

    common::send_json(
        &app,
        "PUT",
        &format!("/api/leaderboards/{entry_id}"),
        json!({"rank": 7}),
    )
    .await;

    // A large points change leaves the stored rank alone
    let response = common::send_json(
        &app,
        "PUT",
        &format!("/api/leaderboards/{entry_id}"),
        json!({"total_points": 100000}),
    )
    .await;
    let updated = common::body_json(response).await;
    assert_eq!(updated["rank"], 7);
    assert_eq!(updated["total_points"], 100000);
}

#[tokio::test]
async fn test_negative_points_rejected() {
    let (app, _state) = common::create_test_app();

    let account_id = common::register_user(&app, "ironman", "ironman@marvel.com").await;
    let entry_id = entry_id_for(&app, account_id).await;

    let response = common::send_json(
        &app,
        "PUT",
        &format!("/api/leaderboards/{entry_id}"),
        json!({"total_points": -10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
