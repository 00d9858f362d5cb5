mod common;

use axum::{http::StatusCode, response::IntoResponse};
use exercise_tracker::error::AppError;
use exercise_tracker::validation::PayloadError;
use serde_json::json;

#[tokio::test]
async fn test_not_found_returns_404() {
    let error = AppError::NotFound("exercise 42".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        common::body_json(response).await,
        json!({ "Error": "Not found" })
    );
}

#[tokio::test]
async fn test_validation_returns_400() {
    let error = AppError::from(PayloadError::InvalidDate);
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({ "Error": "Invalid request" })
    );
}

#[tokio::test]
async fn test_internal_returns_500() {
    let error = AppError::Internal("Something went wrong".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({ "Error": "Internal error" })
    );
}

#[tokio::test]
async fn test_database_returns_500() {
    let error = AppError::from(rusqlite::Error::QueryReturnedNoRows);
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({ "Error": "Database error" })
    );
}
