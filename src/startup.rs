//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::MySqlPool;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::admin::AdminSite;
use crate::application::services::{LandCostService, LandCostServiceImpl};
use crate::apps;
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::MySqlLandCostRepository;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// `None` when no database is configured
    pub db: Option<MySqlPool>,
    pub land_costs: Option<Arc<dyn LandCostService>>,
}

impl AppState {
    /// Build state from settings, creating the database pool if configured.
    pub async fn from_settings(settings: Arc<Settings>) -> Result<Self> {
        let Some(url) = settings.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL is not set, land cost API disabled");
            return Ok(Self {
                settings,
                db: None,
                land_costs: None,
            });
        };

        let db = database::create_pool(url, &settings)?;
        match database::ping(&db).await {
            Ok(()) => tracing::info!("Connected to the database"),
            Err(e) => tracing::error!(error = %e, "Error connecting to the database"),
        }

        let repository = Arc::new(MySqlLandCostRepository::new(db.clone()));
        let land_costs: Arc<dyn LandCostService> = Arc::new(LandCostServiceImpl::new(repository));

        Ok(Self {
            settings,
            db: Some(db),
            land_costs: Some(land_costs),
        })
    }
}

/// Build the admin site with every project application registered.
pub fn build_admin_site(settings: Arc<Settings>) -> AdminSite {
    let mut site = AdminSite::new(settings);
    apps::register_all(&mut site);
    site
}

/// Full router with middleware for the given state.
pub fn build_router(state: AppState) -> Router {
    let site = build_admin_site(state.settings.clone());
    let cors = create_cors_layer(state.settings.allow_origins.as_deref());

    routes::create_router(state, &site)
        .layer(CompressionLayer::new())
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        if !settings.has_secret_key() {
            tracing::warn!("SECRET_KEY is empty; set it before deploying");
        }
        handlers::health::init_server_start();

        let settings = Arc::new(settings);
        let state = AppState::from_settings(settings.clone()).await?;
        let router = build_router(state);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
