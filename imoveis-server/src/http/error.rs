//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` JSON bodies. Both kinds echo
//! their underlying message to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body, bad date or bad path id (400)
    Validation(ValidationError),

    /// Any store failure (500, logged)
    Persistence(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                e.to_string()
            }
            Self::Persistence(e) => {
                tracing::error!("Database error: {}", e);
                e.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Persistence(e)
    }
}
