use super::shutdown::shutdown_signal;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{create_cors_layer, enforce_allowed_origin};
use axum::{Router, middleware};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::{io, sync::Arc};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates the application router with documentation and cross-cutting layers.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - JSON 404 and 405 fallbacks
/// - CORS restricted to `cors.allowed_origins`; other origins get a 403
/// - Request tracing
///
/// `apis` should already have its state applied.
///
/// # Errors
/// Returns an error if a configured origin is not a valid header value.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/products", products_router);
/// let router = create_router::<ApiDoc>(api_routes, &CorsConfig::from_env()?)?;
/// ```
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(cors).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS origin: {}", e),
        )
    })?;

    info!(origins = ?cors.allowed_origins, "CORS configured");

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_layer)
        .layer(middleware::from_fn_with_state(
            Arc::new(cors.clone()),
            enforce_allowed_origin,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}
