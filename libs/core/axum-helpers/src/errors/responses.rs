//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": [
            { "field": "name", "message": "Name is required" },
            { "field": "price", "message": "Price must be greater than 0" }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - Origin not in the CORS allow-list",
    content_type = "application/json",
    example = json!({
        "code": 1007,
        "error": "ORIGIN_NOT_ALLOWED",
        "message": "Not allowed by CORS"
    })
)]
pub struct ForbiddenOriginResponse(pub ErrorResponse);
