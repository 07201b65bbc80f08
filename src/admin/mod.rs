//! # Admin Framework
//!
//! A tree of admin pages rendered by the amis front end.
//!
//! - [`AdminSite`] is the root, mounted at `settings.site_path`. It serves
//!   the HTML shell and the JSON app schema.
//! - [`AdminApp`] groups pages under a router prefix and holds the
//!   registered sub-admins.
//! - [`PageAdmin`] is a leaf serving a fixed amis page schema.
//!
//! ```rust,ignore
//! let mut site = AdminSite::new(settings);
//! site.register_admin(apps::app_name::create_app());
//! let router = site.router();
//! ```

mod app;
mod page;
mod site;

pub use app::AdminApp;
pub use page::{join_path, normalize_prefix, AdminPage, PageAdmin, PageSchema};
pub use site::AdminSite;
