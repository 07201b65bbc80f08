//! Admin registration for land acquisition cost estimates.
//!
//! The table page reads from `GET /api/land-costs`.

use serde_json::{json, Value};

use crate::admin::{AdminApp, PageAdmin, PageSchema};

pub const ROUTER_PREFIX: &str = "/land_cost";

/// Columns in the order the estimate sheets print them.
const COLUMNS: &[&str] = &["序号", "项目名称", "单位", "单价（万元）", "成本（万元）"];

pub fn create_app() -> AdminApp {
    let mut app = AdminApp::new(
        PageSchema::new("Land Costs").with_icon("fa fa-map"),
        ROUTER_PREFIX,
    );
    app.register_admin(PageAdmin::new(
        PageSchema::new("Estimate").with_icon("fa fa-table"),
        "/estimate",
        estimate_page(),
    ));
    app
}

/// amis CRUD page filtering the estimate by category.
fn estimate_page() -> Value {
    let columns: Vec<Value> = COLUMNS
        .iter()
        .map(|name| json!({ "name": name, "label": name }))
        .collect();

    json!({
        "type": "page",
        "title": "Land acquisition cost estimate",
        "body": {
            "type": "crud",
            "api": "get:/api/land-costs?category=${category}",
            "loadDataOnce": true,
            "filter": {
                "title": "",
                "body": [{
                    "type": "input-text",
                    "name": "category",
                    "label": "Category",
                    "required": true,
                }],
            },
            "columns": columns,
        },
    })
}
