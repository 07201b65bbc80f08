//! Infrastructure Layer
//!
//! Implementations for external services:
//! - MySQL connection pool
//! - Repository implementations of the domain traits

pub mod database;
pub mod repositories;
