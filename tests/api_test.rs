//! Integration tests for API endpoints.
//!
//! These tests run the real router against an in-memory SQLite database
//! seeded with the fixed sample rows.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use quake_api::api::{create_router, AppState};
use quake_api::errors::AppError;
use quake_api::infra::db::seed;
use quake_api::infra::Database;

// =============================================================================
// Test Helpers
// =============================================================================

/// Build the application router over a freshly seeded in-memory database.
async fn test_app() -> Router {
    // A single pooled connection so every query sees the same in-memory DB
    let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1);

    let conn = sea_orm::Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");

    seed::reseed(&conn).await.expect("seed sample rows");

    let state = AppState::from_database(Arc::new(Database::from_connection(conn)));
    create_router(state)
}

/// Issue a GET request and return (status, parsed JSON body).
async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

// =============================================================================
// Lookup-by-id Tests
// =============================================================================

#[tokio::test]
async fn test_get_existing_earthquake_returns_record() {
    let (status, body) = get_json(test_app().await, "/earthquakes/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["location"], "Chile");
    assert_eq!(body["magnitude"], 9.5);
    assert_eq!(body["year"], 1960);
}

#[tokio::test]
async fn test_get_missing_earthquake_returns_404_with_message() {
    let (status, body) = get_json(test_app().await, "/earthquakes/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Earthquake 9999 not found.");
}

#[tokio::test]
async fn test_negative_id_is_treated_as_missing() {
    let (status, body) = get_json(test_app().await, "/earthquakes/-1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Earthquake -1 not found.");
}

// =============================================================================
// Magnitude Query Tests
// =============================================================================

#[tokio::test]
async fn test_magnitude_query_returns_matches_ordered_by_id() {
    let (status, body) = get_json(test_app().await, "/earthquakes/magnitude/9.0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let quakes = body["quakes"].as_array().unwrap();
    assert_eq!(quakes.len(), 2);
    assert_eq!(quakes[0]["location"], "Chile");
    assert_eq!(quakes[0]["year"], 1960);
    assert_eq!(quakes[1]["location"], "Alaska");
    assert_eq!(quakes[1]["year"], 1964);
}

#[tokio::test]
async fn test_magnitude_query_with_no_matches_returns_empty_list() {
    let (status, body) = get_json(test_app().await, "/earthquakes/magnitude/10.0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["quakes"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_magnitude_threshold_is_inclusive() {
    // 8.1 equals the weakest seeded quake (Mexico 2017), so all 5 match
    let (status, body) = get_json(test_app().await, "/earthquakes/magnitude/8.1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);

    let quakes = body["quakes"].as_array().unwrap();
    assert_eq!(quakes[4]["location"], "Mexico");
    assert_eq!(quakes[4]["magnitude"], 8.1);
}

// =============================================================================
// Ambient Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let response = test_app()
        .await
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Welcome to the Earthquake API");
}

#[tokio::test]
async fn test_health_reports_database_healthy() {
    let (status, body) = get_json(test_app().await, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[tokio::test]
async fn test_app_error_status_codes() {
    use axum::response::IntoResponse;

    let not_found = AppError::EarthquakeNotFound { id: 7 };
    let response = not_found.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let internal = AppError::internal("boom");
    let response = internal.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_not_found_message_contains_id() {
    let err = AppError::EarthquakeNotFound { id: 42 };
    assert_eq!(err.to_string(), "Earthquake 42 not found.");
}

#[tokio::test]
async fn test_internal_error_body_hides_details() {
    use axum::response::IntoResponse;

    let response = AppError::internal("connection string leaked").into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["message"], "An internal error occurred");
}
