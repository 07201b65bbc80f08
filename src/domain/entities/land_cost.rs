//! Land acquisition cost entity and repository trait.
//!
//! Maps to the `land_acquisition_cost_estimate` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// One line of a land acquisition cost estimate.
///
/// Serialized under the column captions the estimate tables display, so the
/// amis table can bind columns by caption:
/// - serial_number -> `序号`
/// - project_name  -> `项目名称`
/// - unit          -> `单位`
/// - unit_price    -> `单价（万元）` (ten-thousand yuan)
/// - cost          -> `成本（万元）` (ten-thousand yuan)
///
/// Prices are DECIMAL in the table and kept as their exact decimal text
/// (`"4.50"`), never as floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCost {
    #[serde(rename = "序号")]
    pub serial_number: Option<String>,

    #[serde(rename = "项目名称")]
    pub project_name: Option<String>,

    #[serde(rename = "单位")]
    pub unit: Option<String>,

    #[serde(rename = "单价（万元）")]
    pub unit_price: Option<String>,

    #[serde(rename = "成本（万元）")]
    pub cost: Option<String>,
}

/// Read access to cost estimate lines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LandCostRepository: Send + Sync {
    /// All lines of the given category, in table order.
    async fn find_by_category(&self, category: &str) -> Result<Vec<LandCost>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_column_captions() {
        let line = LandCost {
            serial_number: Some("1".into()),
            project_name: Some("土地补偿费".into()),
            unit: Some("亩".into()),
            unit_price: Some("4.50".into()),
            cost: Some("90.00".into()),
        };

        let json = serde_json::to_value(&line).unwrap();

        assert_eq!(json["序号"], "1");
        assert_eq!(json["项目名称"], "土地补偿费");
        assert_eq!(json["单位"], "亩");
        assert_eq!(json["单价（万元）"], "4.50");
        assert_eq!(json["成本（万元）"], "90.00");
    }

    #[test]
    fn test_missing_values_serialize_as_null() {
        let line = LandCost {
            serial_number: None,
            project_name: Some("合计".into()),
            unit: None,
            unit_price: None,
            cost: Some("120.00".into()),
        };

        let json = serde_json::to_value(&line).unwrap();

        assert!(json["单位"].is_null());
        assert!(json["单价（万元）"].is_null());
    }
}
