//! The admin site: root of the admin tree and the amis shell serving it.

use std::sync::Arc;

use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Value};

use super::app::AdminApp;
use super::page::{join_path, normalize_prefix, AdminPage, PageSchema};
use crate::application::dto::AmisResponse;
use crate::config::Settings;
use crate::startup::AppState;

const SHELL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>__TITLE__</title>
  <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1" />
  <link rel="icon" href="__ICON__" />
  <link rel="stylesheet" href="__SDK__/__THEME__.css" />
  <link rel="stylesheet" href="__SDK__/helper.css" />
  <link rel="stylesheet" href="__SDK__/iconfont.css" />
  <style>html, body, #root { position: relative; width: 100%; height: 100%; margin: 0; padding: 0; }</style>
</head>
<body>
  <div id="root"></div>
  <script src="__SDK__/sdk.js"></script>
  <script type="text/javascript">
    (function () {
      var amis = amisRequire('amis/embed');
      amis.embed('#root', __SCHEMA__, __PROPS__, { theme: '__THEME__' });
    })();
  </script>
</body>
</html>
"#;

/// Root of the admin tree, mounted at `settings.site_path`.
pub struct AdminSite {
    settings: Arc<Settings>,
    site_path: String,
    root: AdminApp,
}

impl AdminSite {
    pub fn new(settings: Arc<Settings>) -> Self {
        let site_path = join_path(&settings.site_path, "");
        let root = AdminApp::new(
            PageSchema::new(settings.site_title.clone()).with_icon(settings.site_icon.clone()),
            "",
        );
        Self {
            settings,
            site_path,
            root,
        }
    }

    /// Register a top-level admin application or page.
    pub fn register_admin<A>(&mut self, admin: A) -> bool
    where
        A: AdminPage + 'static,
    {
        self.root.register_admin(admin)
    }

    pub fn root(&self) -> &AdminApp {
        &self.root
    }

    /// Normalized mount path, `/` at the root.
    pub fn site_path(&self) -> &str {
        &self.site_path
    }

    /// Path of the JSON app schema endpoint.
    pub fn schema_path(&self) -> String {
        join_path(&self.site_path, "schema")
    }

    /// amis `app` schema: brand plus the navigation tree.
    pub fn app_schema(&self) -> Value {
        json!({
            "type": "app",
            "brandName": self.settings.site_title,
            "logo": self.settings.site_icon,
            "pages": [{
                "children": self.root.children_nav(&self.site_path),
            }],
        })
    }

    /// HTML page loading the amis SDK and rendering the app schema.
    pub fn render_shell(&self) -> String {
        let sdk = format!(
            "{}/{}/sdk",
            self.settings.amis_cdn.trim_end_matches('/'),
            normalize_prefix(&self.settings.amis_pkg).trim_start_matches('/')
        );
        let props = if self.settings.language.is_empty() {
            json!({})
        } else {
            json!({ "locale": self.settings.language })
        };

        SHELL_TEMPLATE
            .replace("__TITLE__", &escape_html(&self.settings.site_title))
            .replace("__ICON__", &escape_html(&self.settings.site_icon))
            .replace("__SDK__", &escape_html(&sdk))
            .replace("__THEME__", &escape_html(&self.settings.amis_theme))
            .replace("__SCHEMA__", &script_json(&self.app_schema()))
            .replace("__PROPS__", &script_json(&props))
    }

    /// Routes of the shell, the schema endpoint, and every registered admin.
    pub fn router(&self) -> Router<AppState> {
        let shell = self.render_shell();
        let schema = self.app_schema();

        let router = Router::new()
            .route(
                &self.site_path,
                get(move || {
                    let shell = shell.clone();
                    async move { Html(shell) }
                }),
            )
            .route(
                &self.schema_path(),
                get(move || {
                    let schema = schema.clone();
                    async move { Json(AmisResponse::ok(schema)) }
                }),
            );

        self.root.mount(router, &self.site_path)
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// JSON safe to inline in a `<script>` element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
