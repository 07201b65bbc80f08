//! Telemetry and Observability
//!
//! Structured logging setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug,project_admin=debug,sqlx=info,tower_http=debug"
    } else {
        "info,project_admin=info,sqlx=warn,tower_http=info"
    }
}

/// Initialize tracing subscriber
///
/// Debug mode logs human-readable lines with source locations; otherwise
/// logs are emitted as JSON.
pub fn init_tracing(debug: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let registry = tracing_subscriber::registry().with(env_filter);

    if debug {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        registry.with(fmt::layer().json().with_target(true)).init();
    }

    let enabled = debug;
    tracing::info!(debug = enabled, "Tracing initialized");
}
