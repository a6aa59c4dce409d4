use axum::Router;
use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // A missing database is logged, not fatal
    let state = AppState::connect(config).await;

    let router = build_router(&state)?;

    info!("Starting catalog API");
    create_app(router, &state.config.server).await?;

    if let Some(db) = state.db {
        match db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    }

    info!("Catalog API shutdown complete");
    Ok(())
}

/// API routes plus docs, CORS and fallbacks.
fn build_router(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)
}
