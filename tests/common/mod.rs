// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use std::sync::Arc;
use teamfit_tracker::config::Config;
use teamfit_tracker::db::SqliteDb;
use teamfit_tracker::routes::create_router;
use teamfit_tracker::AppState;
use tower::ServiceExt;

/// Create a test app over an in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = SqliteDb::open_in_memory().expect("Failed to open in-memory database");
    let state = Arc::new(AppState { config, db });
    (create_router(state.clone()), state)
}

/// Send a bodyless request (GET/DELETE).
#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Send a JSON-bodied request (POST/PUT).
#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user and return the new account id.
#[allow(dead_code)]
pub async fn register_user(app: &axum::Router, username: &str, email: &str) -> i64 {
    let response = send_json(
        app,
        "POST",
        "/api/users/register",
        serde_json::json!({
            "username": username,
            "email": email,
            "first_name": "Test",
            "last_name": "User",
            "password": "training2024",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
