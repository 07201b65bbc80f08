//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;

use project_admin::application::services::{LandCostService, LandCostServiceImpl};
use project_admin::config::Settings;
use project_admin::domain::{LandCost, LandCostRepository};
use project_admin::shared::error::AppError;
use project_admin::startup::{build_router, AppState};

pub const INDEX_HTML: &str = "<html><body>spa</body></html>";
pub const APP_JS: &str = "console.log('app');";

/// In-memory repository recording the categories it was asked for.
#[derive(Default)]
pub struct FakeLandCostRepository {
    pub rows: Vec<(String, LandCost)>,
    pub fail: bool,
    pub queried: Mutex<Vec<String>>,
}

#[async_trait]
impl LandCostRepository for FakeLandCostRepository {
    async fn find_by_category(&self, category: &str) -> Result<Vec<LandCost>, AppError> {
        self.queried.lock().unwrap().push(category.to_string());
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .rows
            .iter()
            .filter(|(c, _)| c == category)
            .map(|(_, line)| line.clone())
            .collect())
    }
}

/// Test application builder
pub struct TestApp {
    pub server: TestServer,
    pub repository: Option<Arc<FakeLandCostRepository>>,
    // Holds the web root alive for the server's lifetime
    _web_root: TempDir,
}

impl TestApp {
    /// App backed by the given repository
    pub fn with_repository(repository: FakeLandCostRepository) -> Self {
        Self::build(Some(Arc::new(repository)))
    }

    /// App without a configured database
    pub fn without_database() -> Self {
        Self::build(None)
    }

    fn build(repository: Option<Arc<FakeLandCostRepository>>) -> Self {
        let web_root = tempfile::tempdir().unwrap();
        fs::write(web_root.path().join("index.html"), INDEX_HTML).unwrap();
        fs::create_dir(web_root.path().join("public")).unwrap();
        fs::write(web_root.path().join("public/app.js"), APP_JS).unwrap();
        fs::create_dir(web_root.path().join("pages")).unwrap();
        fs::write(web_root.path().join("pages/report.html"), "<h1>report</h1>").unwrap();

        let vars = vec![(
            "web_root".to_string(),
            web_root.path().to_string_lossy().into_owned(),
        )];
        let settings = Arc::new(Settings::from_sources(None, vars).unwrap());

        let land_costs = repository.clone().map(|repository| {
            Arc::new(LandCostServiceImpl::new(repository)) as Arc<dyn LandCostService>
        });

        let state = AppState {
            settings,
            db: None,
            land_costs,
        };

        Self {
            server: TestServer::new(build_router(state)).unwrap(),
            repository,
            _web_root: web_root,
        }
    }
}

pub fn land_cost(serial: &str, name: &str, unit_price: &str, cost: &str) -> LandCost {
    LandCost {
        serial_number: Some(serial.to_string()),
        project_name: Some(name.to_string()),
        unit: Some("亩".to_string()),
        unit_price: Some(unit_price.to_string()),
        cost: Some(cost.to_string()),
    }
}
