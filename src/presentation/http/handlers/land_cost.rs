//! Land Cost Handlers
//!
//! # Endpoints
//! - `GET /api/land-costs?category=<category>` - estimate lines of a category

use axum::{
    extract::{Query, State},
    Json,
};

use crate::application::dto::{AmisResponse, ItemsResponse, LandCostQuery};
use crate::domain::LandCost;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List estimate lines for the `category` query parameter.
pub async fn list_land_costs(
    State(state): State<AppState>,
    Query(query): Query<LandCostQuery>,
) -> Result<Json<AmisResponse<ItemsResponse<LandCost>>>, AppError> {
    let service = state
        .land_costs
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("Database is not configured".into()))?;

    let items = service.list_by_category(query.category.as_deref()).await?;

    Ok(Json(AmisResponse::ok(items.into())))
}
