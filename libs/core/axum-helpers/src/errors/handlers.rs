use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback for routes that do not exist.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        ErrorCode::NotFound,
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    let code = ErrorCode::MethodNotAllowed;
    let body = Json(ErrorResponse::new(code, code.default_message()));

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
