//! Unified Error Handling
//!
//! Application-wide error type and response envelope for the HTTP
//! layer. The pricing engine itself never fails - errors only arise
//! from malformed or ineligible requests before pricing runs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Unified API response structure
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> AppResponse<T> {
    /// Success envelope around a payload
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            code: "OK".to_string(),
            message: "success".to_string(),
            data: Some(data),
        })
    }

    /// Success envelope with a human-readable message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            code: "OK".to_string(),
            message: message.into(),
            data: Some(data),
        })
    }
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Request Errors ==========
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    // ========== System Errors ==========
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Join per-field validation messages into one error
    pub fn validation_details(details: &[String]) -> Self {
        AppError::Validation(details.join("; "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),

            // Invalid request (400)
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg.as_str()),

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9001", "Internal server error")
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}
