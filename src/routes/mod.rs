// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod accounts;
pub mod activities;
pub mod leaderboards;
pub mod profiles;
pub mod teams;
pub mod workouts;

use crate::error::AppError;
use crate::AppState;
use axum::http::{header, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the complete router with all routes.
///
/// Every endpoint is unauthenticated; access control is permissive by
/// configuration.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health_check))
        .merge(teams::routes())
        .merge(accounts::routes())
        .merge(profiles::routes())
        .merge(activities::routes())
        .merge(leaderboards::routes())
        .merge(workouts::routes())
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Require a non-empty query parameter on a filtered endpoint.
pub(crate) fn require_param(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{name} parameter required")))
}

/// Require a query parameter holding a numeric identifier.
pub(crate) fn parse_id_param(value: Option<String>, name: &str) -> Result<i64, AppError> {
    require_param(value, name)?
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {name} parameter")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param() {
        assert_eq!(
            require_param(Some("cycling".to_string()), "type").unwrap(),
            "cycling"
        );
        assert!(require_param(None, "type").is_err());
        assert!(require_param(Some(String::new()), "type").is_err());
    }

    #[test]
    fn test_parse_id_param() {
        assert_eq!(parse_id_param(Some("42".to_string()), "team_id").unwrap(), 42);
        assert!(parse_id_param(Some("abc".to_string()), "team_id").is_err());
        assert!(parse_id_param(None, "team_id").is_err());
    }
}
