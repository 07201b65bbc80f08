//! Land acquisition cost estimates.

pub mod admin;
