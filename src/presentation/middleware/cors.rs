//! CORS Middleware Configuration

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Create CORS layer from the configured origins.
///
/// `None` allows any origin. Otherwise only the listed origins are allowed;
/// entries that are not valid header values are skipped.
pub fn create_cors_layer(allow_origins: Option<&[String]>) -> CorsLayer {
    let Some(allow_origins) = allow_origins else {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    };

    let origins: Vec<HeaderValue> = allow_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600)) // 1 hour default
}
