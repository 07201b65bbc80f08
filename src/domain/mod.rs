//! # Domain Layer
//!
//! Business entities and the repository traits that define data access
//! contracts. No dependencies on infrastructure or presentation layers.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
