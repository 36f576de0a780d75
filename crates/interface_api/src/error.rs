//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;
use domain_claims::ClaimError;
use domain_policy::PolicyError;
use domain_quote::QuoteError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(error: QuoteError) -> Self {
        if error.is_not_found() {
            ApiError::NotFound(error.to_string())
        } else if error.is_invalid_state() {
            ApiError::Conflict(error.to_string())
        } else {
            ApiError::Internal(error.to_string())
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(error: PolicyError) -> Self {
        if error.is_not_found() {
            ApiError::NotFound(error.to_string())
        } else if error.is_invalid_state() {
            ApiError::Conflict(error.to_string())
        } else {
            ApiError::Internal(error.to_string())
        }
    }
}

impl From<ClaimError> for ApiError {
    fn from(error: ClaimError) -> Self {
        if error.is_not_found() {
            ApiError::NotFound(error.to_string())
        } else {
            ApiError::Internal(error.to_string())
        }
    }
}

impl From<PortError> for ApiError {
    fn from(error: PortError) -> Self {
        match &error {
            PortError::NotFound { .. } => ApiError::NotFound(error.to_string()),
            PortError::Conflict { .. } => ApiError::Conflict(error.to_string()),
            PortError::Validation { .. } => ApiError::Validation(error.to_string()),
            PortError::Internal { .. } => ApiError::Internal(error.to_string()),
        }
    }
}
