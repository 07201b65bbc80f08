//! Route Configuration
//!
//! Configures all HTTP routes of the application.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use super::handlers;
use crate::admin::AdminSite;
use crate::startup::AppState;

/// Create the main router: API, health probes, admin site, and static files.
///
/// Any path no route or static file claims, including missing files under
/// `/public` and `/pages`, is answered with `index.html` from the web root so
/// the front end can handle its own routing.
pub fn create_router(state: AppState, site: &AdminSite) -> Router {
    let web_root = Path::new(&state.settings.web_root).to_path_buf();
    let index = web_root.join("index.html");

    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .merge(site.router())
        // misses under the static dirs fall through to index.html as well
        .nest_service(
            "/public",
            ServeDir::new(web_root.join("public")).fallback(ServeFile::new(&index)),
        )
        .nest_service(
            "/pages",
            ServeDir::new(web_root.join("pages")).fallback(ServeFile::new(&index)),
        )
        .fallback_service(ServeFile::new(&index))
        .with_state(state)
}

/// JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new().route("/land-costs", get(handlers::land_cost::list_land_costs))
}
