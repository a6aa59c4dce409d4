use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = match &state.db {
        Some(db) => PgProductRepository::new(db.clone()),
        None => PgProductRepository::disconnected(),
    };
    let service = ProductService::new(repository);
    handlers::router(service)
}
