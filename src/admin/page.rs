//! Admin pages: navigation schema and the page trait.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::application::dto::AmisResponse;
use crate::startup::AppState;

/// Navigation entry of an admin page in the amis app shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSchema {
    pub label: String,

    /// Font Awesome class list, e.g. `fa fa-bolt`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Higher values are listed first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

impl PageSchema {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            sort: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_sort(mut self, sort: i32) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Base amis nav node for this schema, pointing at `url`.
    pub(crate) fn nav_node(&self, url: &str) -> Map<String, Value> {
        let mut node = Map::new();
        node.insert("label".into(), json!(self.label));
        if let Some(icon) = &self.icon {
            node.insert("icon".into(), json!(icon));
        }
        node.insert("url".into(), json!(url));
        node
    }
}

/// A node of the admin tree: either an application grouping other pages or
/// a leaf page.
pub trait AdminPage: Send + Sync {
    fn page_schema(&self) -> &PageSchema;

    /// Path segment relative to the parent, normalized to `/segment` or empty.
    fn router_prefix(&self) -> &str;

    /// amis nav node; `base` is the full path of the parent.
    fn nav_item(&self, base: &str) -> Value;

    /// Register this page's HTTP routes under `base`.
    fn mount(&self, router: Router<AppState>, _base: &str) -> Router<AppState> {
        router
    }
}

/// Normalize a router prefix to a single leading `/` and no trailing `/`.
///
/// Blank prefixes normalize to the empty string.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Join a parent path and a child prefix; the root joins to `/`.
pub fn join_path(base: &str, prefix: &str) -> String {
    let joined = format!("{}{}", normalize_prefix(base), normalize_prefix(prefix));
    if joined.is_empty() {
        "/".into()
    } else {
        joined
    }
}

/// Leaf admin serving a fixed amis page schema.
///
/// The schema is fetched by the shell through `schemaApi`, so it is served
/// at the page's own path in the amis envelope.
pub struct PageAdmin {
    page_schema: PageSchema,
    router_prefix: String,
    page: Value,
}

impl PageAdmin {
    pub fn new(page_schema: PageSchema, router_prefix: &str, page: Value) -> Self {
        Self {
            page_schema,
            router_prefix: normalize_prefix(router_prefix),
            page,
        }
    }

    pub fn page(&self) -> &Value {
        &self.page
    }
}

impl AdminPage for PageAdmin {
    fn page_schema(&self) -> &PageSchema {
        &self.page_schema
    }

    fn router_prefix(&self) -> &str {
        &self.router_prefix
    }

    fn nav_item(&self, base: &str) -> Value {
        let path = join_path(base, &self.router_prefix);
        let mut node = self.page_schema.nav_node(&path);
        node.insert("schemaApi".into(), json!(format!("get:{}", path)));
        Value::Object(node)
    }

    fn mount(&self, router: Router<AppState>, base: &str) -> Router<AppState> {
        let path = join_path(base, &self.router_prefix);
        let page = self.page.clone();
        router.route(
            &path,
            get(move || {
                let page = page.clone();
                async move { Json(AmisResponse::ok(page)) }
            }),
        )
    }
}
