//! Error types for the REST API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;


/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Player not found.
    #[error("Player not found: {0}")]
    PlayerNotFound(i64),

    /// Team not found by id.
    #[error("Team not found: {0}")]
    TeamNotFound(i64),

    /// Team not found by name.
    #[error("Team not found: {0}")]
    TeamNameNotFound(String),

    /// Fixture not found.
    #[error("Fixture not found: {0}")]
    FixtureNotFound(i64),

    /// Malformed date parameter.
    #[error("Invalid date: {0}. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::PlayerNotFound(_) => (StatusCode::NOT_FOUND, "PLAYER_NOT_FOUND"),
            ApiError::TeamNotFound(_) | ApiError::TeamNameNotFound(_) => {
                (StatusCode::NOT_FOUND, "TEAM_NOT_FOUND")
            }
            ApiError::FixtureNotFound(_) => (StatusCode::NOT_FOUND, "FIXTURE_NOT_FOUND"),
            ApiError::InvalidDate(_) => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}
