// SPDX-License-Identifier: MIT

//! Workout plan endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

async fn create_workout(app: &axum::Router, name: &str, difficulty: &str) -> i64 {
    let response = common::send_json(
        app,
        "POST",
        "/api/workouts",
        json!({
            "name": name,
            "description": "Build incredible strength",
            "difficulty": difficulty,
            "duration_minutes": 90,
            "exercises": ["Bench Press", "Squats", "Deadlifts"],
            "target_muscle_groups": ["Chest", "Legs", "Back"],
            "calories_estimate": 600.0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    common::body_json(response).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_read_back_workout() {
    let (app, _state) = common::create_test_app();

    let id = create_workout(&app, "Superhero Strength Training", "advanced").await;

    let response = common::send(&app, "GET", &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let workout = common::body_json(response).await;
    assert_eq!(workout["name"], "Superhero Strength Training");
    assert_eq!(workout["difficulty"], "advanced");
    // Exercise lists keep their order
    assert_eq!(
        workout["exercises"],
        json!(["Bench Press", "Squats", "Deadlifts"])
    );
    assert_eq!(
        workout["target_muscle_groups"],
        json!(["Chest", "Legs", "Back"])
    );
}

#[tokio::test]
async fn test_filter_by_difficulty_matches_exactly() {
    let (app, _state) = common::create_test_app();

    create_workout(&app, "Heavy Lifts", "advanced").await;
    create_workout(&app, "Intervals", "intermediate").await;
    create_workout(&app, "Mobility", "beginner").await;

    let response =
        common::send(&app, "GET", "/api/workouts/by_difficulty?difficulty=advanced").await;
    assert_eq!(response.status(), StatusCode::OK);
    let workouts = common::body_json(response).await;
    let workouts = workouts.as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["name"], "Heavy Lifts");
    assert_eq!(workouts[0]["difficulty"], "advanced");
}

#[tokio::test]
async fn test_recommendations_default_to_beginner() {
    let (app, _state) = common::create_test_app();

    create_workout(&app, "Heavy Lifts", "advanced").await;
    create_workout(&app, "Mobility", "beginner").await;

    let response = common::send(&app, "GET", "/api/workouts/recommendations").await;
    assert_eq!(response.status(), StatusCode::OK);
    let workouts = common::body_json(response).await;
    let workouts = workouts.as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["name"], "Mobility");
}

#[tokio::test]
async fn test_recommendations_accept_difficulty_override() {
    let (app, _state) = common::create_test_app();

    create_workout(&app, "Heavy Lifts", "advanced").await;
    create_workout(&app, "Mobility", "beginner").await;

    let response =
        common::send(&app, "GET", "/api/workouts/recommendations?difficulty=advanced").await;
    let workouts = common::body_json(response).await;
    let workouts = workouts.as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["name"], "Heavy Lifts");
}

#[tokio::test]
async fn test_by_difficulty_requires_parameter() {
    let (app, _state) = common::create_test_app();

    let response = common::send(&app, "GET", "/api/workouts/by_difficulty").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_difficulty_rejected() {
    let (app, _state) = common::create_test_app();

    let response =
        common::send(&app, "GET", "/api/workouts/by_difficulty?difficulty=expert").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_workout_merges_fields() {
    let (app, _state) = common::create_test_app();

    let id = create_workout(&app, "Heavy Lifts", "advanced").await;

    let response = common::send_json(
        &app,
        "PUT",
        &format!("/api/workouts/{id}"),
        json!({"difficulty": "intermediate", "exercises": ["Front Squats"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = common::body_json(response).await;
    assert_eq!(updated["difficulty"], "intermediate");
    assert_eq!(updated["exercises"], json!(["Front Squats"]));
    assert_eq!(updated["name"], "Heavy Lifts");
    assert_eq!(updated["target_muscle_groups"], json!(["Chest", "Legs", "Back"]));
}

#[tokio::test]
async fn test_delete_workout() {
    let (app, _state) = common::create_test_app();

    let id = create_workout(&app, "Heavy Lifts", "advanced").await;
    let response = common::send(&app, "DELETE", &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = common::send(&app, "GET", &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
