//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Settings are layered, lowest priority first:
//! - Built-in defaults
//! - The `.env` file at the backend root (via dotenvy, never exported to the process)
//! - Process environment variables (matched case-insensitively by field name)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use project_admin::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
