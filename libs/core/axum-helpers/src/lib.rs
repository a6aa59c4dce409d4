//! # Axum Helpers
//!
//! Shared building blocks for Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with API docs, graceful shutdown
//! - **[`http`]**: CORS allow-list layer and origin enforcement
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`validation`]**: Declarative field rules and predicates
//! - **[`extractors`]**: The [`Validated`] extractor
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::{FromEnv, cors::CorsConfig, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, &CorsConfig::from_env()?)?;
//!
//!     create_app(router, &ServerConfig::from_env()?).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

pub use server::{create_app, create_router, shutdown_signal};

pub use http::{create_cors_layer, enforce_allowed_origin};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{FromValidated, Validated};

pub use validation::{Check, FieldError, FieldRule, RequestInput, Source};
