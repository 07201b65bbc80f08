//! Application Layer
//!
//! Services and data transfer objects (DTOs) sitting between the
//! presentation and domain layers.

pub mod services;
pub mod dto;
