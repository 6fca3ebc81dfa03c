//! JSON error body shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::AuthError;
use crate::domain::workout::WorkoutError;

/// Standard error response: `{"code": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: impl std::fmt::Display) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn store_unavailable() -> Self {
        Self::new("STORE_UNAVAILABLE", "Workout records are temporarily unavailable")
    }

    pub fn auth_unavailable() -> Self {
        Self::new("AUTH_UNAVAILABLE", "Authentication service unavailable")
    }

    /// Pairs the body with a status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Maps a workout query failure to its HTTP response.
pub fn workout_error_response(error: WorkoutError) -> Response {
    match error {
        WorkoutError::Unauthorized => ErrorResponse::unauthorized("Authentication required")
            .with_status(StatusCode::UNAUTHORIZED),
        WorkoutError::InvalidInput(msg) => {
            ErrorResponse::bad_request(msg).with_status(StatusCode::BAD_REQUEST)
        }
        WorkoutError::StoreUnavailable(msg) => {
            tracing::error!("Record store failure: {}", msg);
            ErrorResponse::store_unavailable().with_status(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Maps a token validation failure to its HTTP response.
pub fn auth_error_response(error: &AuthError) -> Response {
    match error {
        AuthError::TokenExpired => {
            ErrorResponse::unauthorized("Token expired").with_status(StatusCode::UNAUTHORIZED)
        }
        AuthError::InvalidToken => {
            ErrorResponse::unauthorized("Invalid token").with_status(StatusCode::UNAUTHORIZED)
        }
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            ErrorResponse::auth_unavailable().with_status(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
