use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Default filter for local development: request traces and SQL statements.
const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sea_orm=info,sqlx=info,hyper=info";

/// Default filter in production: service info, quieter dependencies.
const PRODUCTION_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";

/// Install color-eyre for startup error reports.
///
/// Call this first in `main()`. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global tracing subscriber.
///
/// - **Production** (`APP_ENV=production`): flattened JSON lines for log aggregation
/// - **Development** (default): pretty, human-readable output
///
/// `RUST_LOG` overrides the default filter in both modes. An
/// [`tracing_error::ErrorLayer`] is installed so eyre reports carry span traces.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if is_production {
            PRODUCTION_FILTER
        } else {
            DEVELOPMENT_FILTER
        })
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
