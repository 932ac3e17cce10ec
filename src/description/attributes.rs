//! Partial product input for description generation

use crate::core::lifecycle::LifecycleStatus;
use crate::core::product::{Dimensions, ProductDraft, Weight};
use serde::{Deserialize, Serialize};

/// Whatever the form holds so far. Every attribute is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductAttributes {
    pub name: Option<String>,
    pub part_number: Option<String>,
    pub material: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub weight: Option<Weight>,
    pub supplier: Option<String>,
    pub manufacturer: Option<String>,
    pub lifecycle_status: Option<LifecycleStatus>,
}

impl ProductAttributes {
    /// The product name, if one was given and is non-empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// `- Key: value` lines for every present, non-empty attribute.
    ///
    /// Order is fixed: name, part number, material, dimensions, weight,
    /// supplier, manufacturer, lifecycle status.
    pub fn to_bullet_list(&self) -> String {
        let entries = [
            ("Product Name", self.name.clone()),
            ("Part Number", self.part_number.clone()),
            ("Material", self.material.clone()),
            ("Dimensions", self.dimensions.map(|d| d.to_string())),
            ("Weight", self.weight.map(|w| w.to_string())),
            ("Supplier", self.supplier.clone()),
            ("Manufacturer", self.manufacturer.clone()),
            (
                "Lifecycle Status",
                self.lifecycle_status.map(|s| s.label().to_string()),
            ),
        ];

        entries
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .map(|(key, value)| format!("- {}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&ProductDraft> for ProductAttributes {
    fn from(draft: &ProductDraft) -> Self {
        Self {
            name: Some(draft.name.clone()),
            part_number: Some(draft.part_number.clone()),
            material: Some(draft.material.clone()),
            dimensions: Some(draft.dimensions),
            weight: Some(draft.weight),
            supplier: Some(draft.supplier.clone()),
            manufacturer: Some(draft.manufacturer.clone()),
            lifecycle_status: Some(draft.lifecycle_status),
        }
    }
}
