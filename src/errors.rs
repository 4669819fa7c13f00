//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::MessageResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Earthquake {id} not found.")]
    EarthquakeNotFound { id: i32 },

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::EarthquakeNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::EarthquakeNotFound { .. } => self.to_string(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageResponse::new(self.user_message());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
