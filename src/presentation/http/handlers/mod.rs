//! HTTP Handlers
//!
//! Request handlers for the API endpoints.

pub mod health;
pub mod land_cost;
