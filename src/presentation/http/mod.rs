//! HTTP Interface
//!
//! Router assembly and request handlers.

pub mod handlers;
pub mod routes;
