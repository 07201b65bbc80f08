//! Land Cost Repository Implementation
//!
//! MySQL implementation of cost estimate lookups.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::domain::{LandCost, LandCostRepository};
use crate::shared::error::AppError;

/// Row shape of `land_acquisition_cost_estimate`.
///
/// Prices are DECIMAL columns, selected as text to keep their exact scale.
#[derive(Debug, Clone, sqlx::FromRow)]
struct LandCostRow {
    serial_number: Option<String>,
    project_name: Option<String>,
    unit: Option<String>,
    unit_price: Option<String>,
    cost: Option<String>,
}

impl From<LandCostRow> for LandCost {
    fn from(row: LandCostRow) -> Self {
        Self {
            serial_number: row.serial_number,
            project_name: row.project_name,
            unit: row.unit,
            unit_price: row.unit_price,
            cost: row.cost,
        }
    }
}

/// MySQL implementation of the LandCostRepository.
pub struct MySqlLandCostRepository {
    pool: MySqlPool,
}

impl MySqlLandCostRepository {
    /// Creates a new MySqlLandCostRepository with the given connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LandCostRepository for MySqlLandCostRepository {
    async fn find_by_category(&self, category: &str) -> Result<Vec<LandCost>, AppError> {
        let rows = sqlx::query_as::<_, LandCostRow>(
            r#"
            SELECT CAST(serial_number AS CHAR) AS serial_number,
                   project_name,
                   unit,
                   CAST(unit_price AS CHAR) AS unit_price,
                   CAST(cost AS CHAR) AS cost
            FROM land_acquisition_cost_estimate
            WHERE category = ?
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LandCost::from).collect())
    }
}
