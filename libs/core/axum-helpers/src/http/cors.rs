use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::cors::CorsConfig;
use std::{sync::Arc, time::Duration};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer for the configured allow-list.
///
/// - Methods: GET, POST, PUT, PATCH, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
///
/// # Errors
/// Fails if an origin is not a valid header value.
pub fn create_cors_layer(
    config: &CorsConfig,
) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Rejects requests whose `Origin` is outside the allow-list with a 403.
///
/// Requests without an `Origin` header (same-origin navigation, curl) pass through.
///
/// ```ignore
/// let router = router.layer(axum::middleware::from_fn_with_state(
///     Arc::new(cors_config),
///     enforce_allowed_origin,
/// ));
/// ```
pub async fn enforce_allowed_origin(
    State(config): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let origin = origin.to_str().unwrap_or_default();
        if !config.is_allowed(origin) {
            return AppError::OriginNotAllowed(origin.to_string()).into_response();
        }
    }

    next.run(request).await
}
