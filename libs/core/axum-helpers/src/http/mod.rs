//! HTTP middleware.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, enforce_allowed_origin};
//!
//! let app = Router::new()
//!     .layer(create_cors_layer(&cors)?)
//!     .layer(axum::middleware::from_fn_with_state(Arc::new(cors), enforce_allowed_origin));
//! ```

pub mod cors;

pub use cors::{create_cors_layer, enforce_allowed_origin};
