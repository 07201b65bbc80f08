//! # Admin Applications
//!
//! Each submodule builds one [`AdminApp`](crate::admin::AdminApp) and lists
//! its pages in its `admin` module.

pub mod app_name;
pub mod land_cost;

use crate::admin::AdminSite;

/// Register every application of the project on the site.
pub fn register_all(site: &mut AdminSite) {
    site.register_admin(app_name::admin::create_app());
    site.register_admin(land_cost::admin::create_app());
}
