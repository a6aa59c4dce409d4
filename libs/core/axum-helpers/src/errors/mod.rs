pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use crate::validation::FieldError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error leaving the API has this shape:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional per-field validation failures
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Request validation failed",
///   "details": [{ "field": "price", "message": "Price must be greater than 0" }]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Field-level validation failures, in rule order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidJson(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::OriginNotAllowed(_) => StatusCode::FORBIDDEN,
            AppError::Database(_)
            | AppError::DatabaseUnavailable(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::InvalidJson(_) => ErrorCode::InvalidJson,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::OriginNotAllowed(_) => ErrorCode::OriginNotAllowed,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::DatabaseUnavailable(_) => ErrorCode::DatabaseUnavailable,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let (message, details) = match self {
            AppError::Validation(errors) => {
                tracing::info!(
                    error_code = code.code(),
                    fields = errors.len(),
                    "Validation error: {:?}",
                    errors
                );
                (code.default_message().to_string(), Some(errors))
            }
            AppError::InvalidJson(e) => {
                tracing::warn!(error_code = code.code(), "Invalid JSON body: {}", e);
                (code.default_message().to_string(), None)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                (msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (msg, None)
            }
            AppError::OriginNotAllowed(origin) => {
                tracing::warn!(error_code = code.code(), %origin, "Rejected cross-origin request");
                (code.default_message().to_string(), None)
            }
            AppError::Database(e) => {
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                (code.default_message().to_string(), None)
            }
            AppError::DatabaseUnavailable(msg) => {
                tracing::error!(error_code = code.code(), "Database unavailable: {}", msg);
                (code.default_message().to_string(), None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                (code.default_message().to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            details,
            ..ErrorResponse::new(code, message)
        });

        (status, body).into_response()
    }
}
