//! # Project Admin
//!
//! Admin panel backend entry point. Initializes:
//! - Configuration loading (`.env` + environment)
//! - Tracing/logging subsystem
//! - MySQL connection pool (when configured)
//! - HTTP server with the admin site

use anyhow::Result;
use tracing::info;

use project_admin::config::Settings;
use project_admin::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings first: the log format depends on `debug`
    let settings = Settings::load()?;

    project_admin::telemetry::init_tracing(settings.debug);

    info!(
        name = %settings.name,
        host = %settings.host,
        port = %settings.port,
        site_path = %settings.site_path,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
