//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **LandCostService**: cost estimate lookups by category

pub mod land_cost_service;

pub use land_cost_service::{LandCostService, LandCostServiceImpl};
