//! Error handling for the AETHER monitor
//!
//! Upstream failures never reach this type: services substitute fallback
//! data. What remains are unexpected internal faults, all of which render as
//! a generic 500 with a static `{"error": ...}` payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Signal source task failed: {0}")]
    SourceTask(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::SourceTask(err.to_string())
    }
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Static message exposed to callers; details stay in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "Service is misconfigured",
            AppError::SourceTask(_) => "Failed to assemble signal data",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_is_a_500_with_static_message() {
        let response = AppError::Configuration("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let config = AppError::Configuration("bad tls backend".to_string());
        assert_eq!(config.public_message(), "Service is misconfigured");

        let err = AppError::SourceTask("panicked".to_string());
        assert_eq!(err.public_message(), "Failed to assemble signal data");
    }
}
