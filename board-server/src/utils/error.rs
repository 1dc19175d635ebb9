//! Unified error handling
//!
//! [`AppError`] is the application-level error every handler returns. On the
//! wire a failure is always `{"error": "<message>"}` plus an HTTP status:
//!
//! | Variant | Status |
//! |------------|--------|
//! | NotFound   | 404 |
//! | Validation | 400 |
//! | Database   | 500 |
//! | Upstream   | 502 |
//! | Internal   | 500 |
//!
//! 5xx causes are logged and not leaked to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Referenced board/task/tag id does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or semantically invalid input (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Constraint violation or connectivity loss in the store (500)
    #[error("Database error: {0}")]
    Database(String),

    /// The generative API call failed (502)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Anything else (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire shape for every failed request
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Upstream(msg) => {
                error!(target: "assistant", error = %msg, "Upstream call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to communicate with AI service".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
