//! The `App_name` application.

pub mod admin;
