//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
///
/// Every generation error is a recoverable user-facing condition; only
/// `GenerationFailed` is worth retrying as-is, the rest require different
/// input or a session reset.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Technology input was empty after trimming
    #[error("Please enter a technology you want to learn")]
    EmptyTechnology,

    /// No free generations left for the requested model
    #[error("No free uses left for {0}")]
    QuotaExhausted(String),

    /// The triple has already been generated
    #[error("Learning material for this technology, level and model already exists: {0}")]
    DuplicatePage(String),

    /// Session request ceiling reached
    #[error("Too many requests. Please wait a few seconds before generating again")]
    TooManyRequests,

    /// Remote generation call failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Model identifier is not one of the supported models
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Registry already holds an entry for the triple
    #[error("Duplicate registry entry: {0}")]
    DuplicateEntry(String),

    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure returned to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyTechnology
            | AppError::UnknownModel(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::QuotaExhausted(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::DuplicatePage(_) | AppError::DuplicateEntry(_) => StatusCode::CONFLICT,
            AppError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            AppError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::HttpClient(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::EmptyTechnology => "empty_technology",
            AppError::QuotaExhausted(_) => "quota_exhausted",
            AppError::DuplicatePage(_) => "duplicate_page",
            AppError::TooManyRequests => "too_many_requests",
            AppError::GenerationFailed(_) => "generation_failed",
            AppError::UnknownModel(_) => "unknown_model",
            AppError::DuplicateEntry(_) => "duplicate_entry",
            AppError::Validation(_) => "invalid_request_error",
            AppError::Config(_)
            | AppError::HttpClient(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => "api_error",
        }
    }

    /// Whether the user can retry the same request unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::GenerationFailed(_) | AppError::HttpClient(_))
    }

    /// Convert to the wire error format
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self.error_type(), status);
        }

        let error_response = self.to_error_response();

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
