//! Land Cost Service
//!
//! Looks up land acquisition cost estimate lines by category.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{LandCost, LandCostRepository};
use crate::shared::error::AppError;

/// Land cost service trait.
#[async_trait]
pub trait LandCostService: Send + Sync {
    /// Estimate lines for a category.
    ///
    /// A missing or blank category matches nothing and yields an empty list
    /// without touching the database.
    async fn list_by_category(&self, category: Option<&str>) -> Result<Vec<LandCost>, AppError>;
}

/// Repository-backed implementation of [`LandCostService`].
pub struct LandCostServiceImpl {
    repository: Arc<dyn LandCostRepository>,
}

impl LandCostServiceImpl {
    pub fn new(repository: Arc<dyn LandCostRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LandCostService for LandCostServiceImpl {
    async fn list_by_category(&self, category: Option<&str>) -> Result<Vec<LandCost>, AppError> {
        let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) else {
            tracing::debug!("No category given, returning no land costs");
            return Ok(Vec::new());
        };

        let lines = self.repository.find_by_category(category).await?;
        tracing::debug!(category, count = lines.len(), "Fetched land costs");
        Ok(lines)
    }
}
