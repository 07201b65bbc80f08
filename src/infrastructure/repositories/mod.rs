//! Repository Implementations
//!
//! MySQL implementations of domain repository traits.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::MySqlPool;
//! use crate::infrastructure::repositories::MySqlLandCostRepository;
//!
//! fn setup_repositories(pool: MySqlPool) {
//!     let land_costs = MySqlLandCostRepository::new(pool);
//! }
//! ```

mod land_cost_repository;

pub use land_cost_repository::MySqlLandCostRepository;
