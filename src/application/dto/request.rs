//! Request DTOs
//!
//! Data structures for query strings and request bodies.

use serde::Deserialize;

/// Query string of `GET /api/land-costs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LandCostQuery {
    pub category: Option<String>,
}
