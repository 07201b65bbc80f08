//! Admin applications: named, routable groups of admin pages.

use axum::Router;
use serde_json::Value;

use super::page::{join_path, normalize_prefix, AdminPage, PageSchema};
use crate::startup::AppState;

/// A group of admin pages mounted under a common prefix.
///
/// Applications are themselves admin pages, so they nest.
pub struct AdminApp {
    page_schema: PageSchema,
    router_prefix: String,
    admins: Vec<Box<dyn AdminPage>>,
}

impl AdminApp {
    pub fn new(page_schema: PageSchema, router_prefix: &str) -> Self {
        Self {
            page_schema,
            router_prefix: normalize_prefix(router_prefix),
            admins: Vec::new(),
        }
    }

    /// Register a sub-admin.
    ///
    /// Returns `false` and leaves the app unchanged when another admin is
    /// already mounted at the same prefix.
    pub fn register_admin<A>(&mut self, admin: A) -> bool
    where
        A: AdminPage + 'static,
    {
        if self
            .admins
            .iter()
            .any(|existing| existing.router_prefix() == admin.router_prefix())
        {
            tracing::warn!(
                app = %self.page_schema.label,
                prefix = %admin.router_prefix(),
                "Admin already registered at this prefix, ignoring"
            );
            return false;
        }

        tracing::debug!(
            app = %self.page_schema.label,
            admin = %admin.page_schema().label,
            "Registered admin"
        );
        self.admins.push(Box::new(admin));
        true
    }

    /// Registered sub-admins in registration order.
    pub fn admins(&self) -> &[Box<dyn AdminPage>] {
        &self.admins
    }

    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }

    /// Nav nodes of the sub-admins, highest `sort` first.
    pub fn children_nav(&self, path: &str) -> Vec<Value> {
        let mut admins: Vec<&dyn AdminPage> = self.admins.iter().map(|a| &**a).collect();
        // stable: equal sort keeps registration order
        admins.sort_by_key(|a| std::cmp::Reverse(a.page_schema().sort.unwrap_or(0)));
        admins.into_iter().map(|a| a.nav_item(path)).collect()
    }
}

impl AdminPage for AdminApp {
    fn page_schema(&self) -> &PageSchema {
        &self.page_schema
    }

    fn router_prefix(&self) -> &str {
        &self.router_prefix
    }

    fn nav_item(&self, base: &str) -> Value {
        let path = join_path(base, &self.router_prefix);
        let mut node = self.page_schema.nav_node(&path);
        node.insert("children".into(), Value::Array(self.children_nav(&path)));
        Value::Object(node)
    }

    fn mount(&self, router: Router<AppState>, base: &str) -> Router<AppState> {
        let path = join_path(base, &self.router_prefix);
        self.admins
            .iter()
            .fold(router, |router, admin| admin.mount(router, &path))
    }
}
