//! Admin registration for `App_name`.

use crate::admin::{AdminApp, PageSchema};

pub const LABEL: &str = "App_name";
pub const ICON: &str = "fa fa-bolt";
pub const ROUTER_PREFIX: &str = "/app_name";

/// Build the application. Register its pages with `app.register_admin(...)`
/// before returning; none are registered yet.
pub fn create_app() -> AdminApp {
    AdminApp::new(PageSchema::new(LABEL).with_icon(ICON), ROUTER_PREFIX)
}
