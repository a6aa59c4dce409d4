use axum::Router;

pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(domain_products::handlers::URL, products::router(state))
}
