//! # Project Admin Library
//!
//! Admin panel backend serving an amis front end:
//! - Typed settings loaded from defaults, a `.env` file, and the environment
//! - An admin site of registrable admin applications
//! - A JSON API over MySQL in the amis response envelope
//! - Static file serving with a single-page-app fallback
//!
//! ## Module Structure
//!
//! ```text
//! project_admin/
//! +-- config/         Settings loading
//! +-- admin/          Admin site, applications, and pages
//! +-- apps/           The project's admin applications
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ MySQL pool and repositories
//! +-- presentation/   HTTP routes, handlers, and middleware
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Admin framework and the project's admin applications
pub mod admin;
pub mod apps;

// Domain layer - Entities and repository traits
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
