//! Type-safe error codes for API responses.
//!
//! Each code carries a client-facing identifier (e.g. `"VALIDATION_ERROR"`),
//! an integer used in logs and dashboards (e.g. `1001`) and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// One or more request fields failed validation
    ValidationError,

    /// Request body is not valid JSON
    InvalidJson,

    /// Malformed request that is not a field validation failure
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Cross-origin request from an origin outside the allow-list
    OriginNotAllowed,

    /// HTTP method is not supported on this route
    MethodNotAllowed,

    // Database errors (2000-2999)
    /// Query or statement failed
    DatabaseError,

    /// No database connection is available
    DatabaseUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::OriginNotAllowed => "ORIGIN_NOT_ALLOWED",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client and generic errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::OriginNotAllowed => 1007,
            Self::BadRequest => 1010,
            Self::MethodNotAllowed => 1012,

            Self::DatabaseError => 2003,
            Self::DatabaseUnavailable => 2014,
        }
    }

    /// Default human-readable message, used when no specific one is given.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Invalid JSON format",
            Self::BadRequest => "Malformed request",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::OriginNotAllowed => "Not allowed by CORS",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::DatabaseError => "Database error occurred",
            Self::DatabaseUnavailable => "Database is unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
