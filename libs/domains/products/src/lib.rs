//! Products Domain
//!
//! Catalog products stored in PostgreSQL through SeaORM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Not-found handling, toggle and replace semantics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, response envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! // Mount under `/api` + handlers::URL
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{
    CreateProduct, MessageData, Product, ProductData, ProductId, ProductListData, ReplaceProduct,
    UpdateProduct,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
