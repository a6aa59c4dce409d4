//! Server infrastructure: router assembly with API documentation, and
//! serving with graceful shutdown.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, &cors_config)?;
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_app, create_router};
pub use shutdown::shutdown_signal;
