//! Presentation models for the list and detail views

use crate::core::entity::Entity;
use crate::core::lifecycle::{LifecycleStatus, StatusStyle};
use crate::core::product::Product;
use crate::core::quality::QualityReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One row of the product list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub part_number: String,
    pub lifecycle_status: LifecycleStatus,
    /// Status dot color token
    pub status_dot: &'static str,
    pub has_description: bool,
    pub last_modified: DateTime<Utc>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name.clone(),
            part_number: product.part_number.clone(),
            lifecycle_status: product.lifecycle_status,
            status_dot: product.lifecycle_status.style().dot,
            has_description: !product.description.is_empty(),
            last_modified: product.updated_at(),
        }
    }
}

/// Everything the detail view shows for a single product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,
    /// e.g. `"150 x 75 x 50 mm"`
    pub dimensions: String,
    /// e.g. `"0.35 kg"`
    pub weight: String,
    pub status_badge: &'static str,
    pub quality: QualityReport,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            product: product.clone(),
            dimensions: product.dimensions.to_string(),
            weight: product.weight.to_string(),
            status_badge: product.lifecycle_status.style().badge,
            quality: QualityReport::for_product(product),
        }
    }
}

/// A lifecycle status with its style tokens, for the status picker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusOption {
    pub status: LifecycleStatus,
    pub label: &'static str,
    #[serde(flatten)]
    pub style: StatusStyle,
}

impl StatusOption {
    pub fn all() -> Vec<StatusOption> {
        LifecycleStatus::ALL
            .into_iter()
            .map(|status| StatusOption {
                status,
                label: status.label(),
                style: status.style(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::product::ProductDraft;

    fn product(description: &str) -> Product {
        Product::create(ProductDraft {
            name: "Hex Bolt".to_string(),
            part_number: "PAR-HEX-M8".to_string(),
            description: description.to_string(),
            lifecycle_status: LifecycleStatus::Testing,
            ..ProductDraft::default()
        })
    }

    #[test]
    fn test_summary_fields() {
        let product = product("");
        let summary = ProductSummary::from(&product);

        assert_eq!(summary.id, product.id());
        assert_eq!(summary.part_number, "PAR-HEX-M8");
        assert_eq!(summary.status_dot, LifecycleStatus::Testing.style().dot);
        assert!(!summary.has_description);
        assert!(ProductSummary::from(&self::product("Bolt.")).has_description);
    }

    #[test]
    fn test_summary_wire_shape() {
        let json = serde_json::to_value(ProductSummary::from(&product("x"))).unwrap();
        assert_eq!(json["partNumber"], "PAR-HEX-M8");
        assert_eq!(json["lifecycleStatus"], "Testing");
        assert_eq!(json["hasDescription"], true);
    }

    #[test]
    fn test_detail_formats_measures_and_scores() {
        let product = product("");
        let detail = ProductDetail::from(&product);

        assert_eq!(detail.dimensions, "0 x 0 x 0 mm");
        assert_eq!(detail.weight, "0 kg");
        assert_eq!(detail.status_badge, LifecycleStatus::Testing.style().badge);
        assert_eq!(detail.quality, QualityReport::for_product(&product));
    }

    #[test]
    fn test_status_options_cover_all_statuses() {
        let options = StatusOption::all();
        assert_eq!(options.len(), 4);
        assert_eq!(options[2].label, "In Production");

        let json = serde_json::to_value(options[0]).unwrap();
        assert_eq!(json["status"], "Design");
        assert!(json["badge"].is_string());
        assert!(json["dot"].is_string());
    }
}
