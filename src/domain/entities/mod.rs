//! # Domain Entities
//!
//! Core domain entities. Each entity maps to a database table and has an
//! associated repository trait implemented in the infrastructure layer.

mod land_cost;

pub use land_cost::{LandCost, LandCostRepository};

#[cfg(test)]
pub use land_cost::MockLandCostRepository;
