//! The product record, its editable draft and their value types

use crate::core::entity::Entity;
use crate::core::field::FieldValue;
use crate::core::lifecycle::LifecycleStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Materials offered by the product form. The first entry is the default.
///
/// Free-text materials are still accepted; this is a suggestion list only.
pub const MATERIALS: &[&str] = &[
    "Aluminum 6061-T6",
    "Stainless Steel 304",
    "Stainless Steel 316",
    "Carbon Steel 1045",
    "Brass C360",
    "Copper C110",
    "Titanium Grade 5",
    "ABS Plastic",
    "Polycarbonate",
    "Nylon PA6",
];

/// Text fields that can be searched, by wire name
pub const SEARCHABLE_FIELDS: &[&str] = &[
    "gtin",
    "partNumber",
    "name",
    "description",
    "material",
    "lifecycleStatus",
    "supplier",
    "manufacturer",
    "dataOwner",
    "sourceSystem",
];

/// Unit of the dimension triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "in")]
    Inch,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
        }
    }
}

/// Unit of the weight value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "g")]
    Gram,
    #[default]
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
}

impl WeightUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lb",
        }
    }
}

/// Length x width x height with a unit tag
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, deserialize_with = "lenient::number")]
    pub length: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub width: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub height: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64, unit: LengthUnit) -> Self {
        Self {
            length,
            width,
            height,
            unit,
        }
    }
}

/// Renders as `"150 x 75 x 50 mm"`
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} x {} {}",
            self.length,
            self.width,
            self.height,
            self.unit.symbol()
        )
    }
}

/// Weight value with a unit tag
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weight {
    #[serde(default, deserialize_with = "lenient::number")]
    pub value: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl Weight {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }
}

/// Renders as `"2.5 kg"`
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Editable attributes of a product, as submitted by the product form.
///
/// Everything except the identifier and the two timestamps, which are owned
/// by [`Product`] itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    /// Global Trade Item Number (GS1)
    pub gtin: String,
    pub part_number: String,
    pub name: String,
    pub description: String,
    pub material: String,
    pub dimensions: Dimensions,
    pub weight: Weight,
    pub lifecycle_status: LifecycleStatus,
    pub supplier: String,
    pub manufacturer: String,
    /// Governance: who is accountable for this record
    pub data_owner: String,
    /// Provenance: which system the record came from
    pub source_system: String,
    pub image_url: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            gtin: String::new(),
            part_number: String::new(),
            name: String::new(),
            description: String::new(),
            material: MATERIALS[0].to_string(),
            dimensions: Dimensions::default(),
            weight: Weight::default(),
            lifecycle_status: LifecycleStatus::Design,
            supplier: String::new(),
            manufacturer: String::new(),
            data_owner: String::new(),
            source_system: String::new(),
            image_url: placeholder_image_url(&Utc::now().timestamp_millis().to_string()),
        }
    }
}

/// Placeholder product image for a given seed
pub fn placeholder_image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/600/400", seed)
}

/// A part record in the master-data store
///
/// `id` and `creation_date` are fixed when the record is created;
/// `last_modified` moves forward on every edit. The remaining attributes are
/// public and replaced wholesale by [`Product::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: Uuid,
    pub gtin: String,
    pub part_number: String,
    pub name: String,
    pub description: String,
    pub material: String,
    pub dimensions: Dimensions,
    pub weight: Weight,
    pub lifecycle_status: LifecycleStatus,
    pub supplier: String,
    pub manufacturer: String,
    pub data_owner: String,
    pub source_system: String,
    creation_date: DateTime<Utc>,
    last_modified: DateTime<Utc>,
    pub image_url: String,
}

impl Product {
    /// Create a new record from a draft with a fresh id and timestamps
    pub fn create(draft: ProductDraft) -> Self {
        Self::create_at(draft, Utc::now())
    }

    /// Create a new record with an explicit creation instant
    pub fn create_at(draft: ProductDraft, now: DateTime<Utc>) -> Self {
        let ProductDraft {
            gtin,
            part_number,
            name,
            description,
            material,
            dimensions,
            weight,
            lifecycle_status,
            supplier,
            manufacturer,
            data_owner,
            source_system,
            image_url,
        } = draft;

        Self {
            id: Uuid::new_v4(),
            gtin,
            part_number,
            name,
            description,
            material,
            dimensions,
            weight,
            lifecycle_status,
            supplier,
            manufacturer,
            data_owner,
            source_system,
            creation_date: now,
            last_modified: now,
            image_url,
        }
    }

    /// Replace every editable attribute with the draft's values.
    ///
    /// The id and creation date are kept; `last_modified` is refreshed.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.apply_at(draft, Utc::now());
    }

    /// [`Product::apply`] with an explicit modification instant.
    ///
    /// `last_modified` never goes below `creation_date`, even if `now` does.
    pub fn apply_at(&mut self, draft: ProductDraft, now: DateTime<Utc>) {
        self.gtin = draft.gtin;
        self.part_number = draft.part_number;
        self.name = draft.name;
        self.description = draft.description;
        self.material = draft.material;
        self.dimensions = draft.dimensions;
        self.weight = draft.weight;
        self.lifecycle_status = draft.lifecycle_status;
        self.supplier = draft.supplier;
        self.manufacturer = draft.manufacturer;
        self.data_owner = draft.data_owner;
        self.source_system = draft.source_system;
        self.image_url = draft.image_url;
        self.last_modified = now.max(self.creation_date);
    }

    /// Editable view of this record, used to pre-fill the edit form
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            gtin: self.gtin.clone(),
            part_number: self.part_number.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            material: self.material.clone(),
            dimensions: self.dimensions,
            weight: self.weight,
            lifecycle_status: self.lifecycle_status,
            supplier: self.supplier.clone(),
            manufacturer: self.manufacturer.clone(),
            data_owner: self.data_owner.clone(),
            source_system: self.source_system.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Read a field by its wire (camelCase) name.
    ///
    /// Nested numeric fields use a dotted path, e.g. `dimensions.length`.
    /// Returns `None` for names that are not product fields.
    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::String(self.id.to_string()),
            "gtin" => FieldValue::from(self.gtin.as_str()),
            "partNumber" => FieldValue::from(self.part_number.as_str()),
            "name" => FieldValue::from(self.name.as_str()),
            "description" => FieldValue::from(self.description.as_str()),
            "material" => FieldValue::from(self.material.as_str()),
            "dimensions.length" => FieldValue::from(self.dimensions.length),
            "dimensions.width" => FieldValue::from(self.dimensions.width),
            "dimensions.height" => FieldValue::from(self.dimensions.height),
            "weight.value" => FieldValue::from(self.weight.value),
            "lifecycleStatus" => FieldValue::from(self.lifecycle_status.label()),
            "supplier" => FieldValue::from(self.supplier.as_str()),
            "manufacturer" => FieldValue::from(self.manufacturer.as_str()),
            "dataOwner" => FieldValue::from(self.data_owner.as_str()),
            "sourceSystem" => FieldValue::from(self.source_system.as_str()),
            "imageUrl" => FieldValue::from(self.image_url.as_str()),
            _ => return None,
        };
        Some(value)
    }
}

impl Entity for Product {
    fn id(&self) -> Uuid {
        self.id
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.last_modified
    }
}

/// Lenient numeric decoding for form input.
///
/// Accepts JSON numbers and numeric strings; anything unparsable, null or
/// non-finite decodes to `0`, the same value an empty form input has.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let number = match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        Ok(if number.is_finite() { number } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn bracket_draft() -> ProductDraft {
        ProductDraft {
            gtin: "07891234567895".to_string(),
            part_number: "BRK-001-AL".to_string(),
            name: "Main Mounting Bracket".to_string(),
            dimensions: Dimensions::new(150.0, 75.0, 50.0, LengthUnit::Millimeter),
            weight: Weight::new(0.35, WeightUnit::Kilogram),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_draft_defaults_match_form() {
        let draft = ProductDraft::default();
        assert_eq!(draft.material, MATERIALS[0]);
        assert_eq!(draft.dimensions, Dimensions::default());
        assert_eq!(draft.dimensions.unit, LengthUnit::Millimeter);
        assert_eq!(draft.weight.unit, WeightUnit::Kilogram);
        assert_eq!(draft.weight.value, 0.0);
        assert_eq!(draft.lifecycle_status, LifecycleStatus::Design);
        assert!(draft.image_url.starts_with("https://picsum.photos/seed/"));
    }

    #[test]
    fn test_create_sets_both_timestamps() {
        let now = Utc::now();
        let product = Product::create_at(bracket_draft(), now);
        assert_eq!(product.creation_date(), now);
        assert_eq!(product.last_modified(), now);
        assert_eq!(product.name, "Main Mounting Bracket");
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        let a = Product::create(bracket_draft());
        let b = Product::create(bracket_draft());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_apply_preserves_identity_and_refreshes_last_modified() {
        let created = Utc::now();
        let mut product = Product::create_at(bracket_draft(), created);
        let id = product.id();

        let mut draft = product.draft();
        draft.lifecycle_status = LifecycleStatus::Obsolete;
        draft.supplier = "Acme Metals".to_string();
        let later = created + Duration::minutes(5);
        product.apply_at(draft, later);

        assert_eq!(product.id(), id);
        assert_eq!(product.creation_date(), created);
        assert_eq!(product.last_modified(), later);
        assert_eq!(product.lifecycle_status, LifecycleStatus::Obsolete);
        assert_eq!(product.supplier, "Acme Metals");
    }

    #[test]
    fn test_apply_never_moves_last_modified_before_creation() {
        let created = Utc::now();
        let mut product = Product::create_at(bracket_draft(), created);
        product.apply_at(bracket_draft(), created - Duration::hours(1));
        assert_eq!(product.last_modified(), created);
    }

    #[test]
    fn test_display_formats() {
        let draft = bracket_draft();
        assert_eq!(draft.dimensions.to_string(), "150 x 75 x 50 mm");
        assert_eq!(draft.weight.to_string(), "0.35 kg");
        assert_eq!(
            Weight::new(2.0, WeightUnit::Pound).to_string(),
            "2 lb"
        );
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let product = Product::create(bracket_draft());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["partNumber"], "BRK-001-AL");
        assert_eq!(value["dimensions"]["unit"], "mm");
        assert_eq!(value["weight"]["unit"], "kg");
        assert_eq!(value["lifecycleStatus"], "Design");
        assert!(value["creationDate"].is_string());
        assert!(value["lastModified"].is_string());
        assert!(value["id"].is_string());
    }

    #[test]
    fn test_draft_coerces_invalid_numbers_to_zero() {
        let draft: ProductDraft = serde_json::from_value(json!({
            "name": "Washer",
            "dimensions": { "length": "abc", "width": "12.5", "height": null, "unit": "in" },
            "weight": { "value": "", "unit": "g" }
        }))
        .unwrap();

        assert_eq!(draft.dimensions.length, 0.0);
        assert_eq!(draft.dimensions.width, 12.5);
        assert_eq!(draft.dimensions.height, 0.0);
        assert_eq!(draft.dimensions.unit, LengthUnit::Inch);
        assert_eq!(draft.weight.value, 0.0);
        assert_eq!(draft.weight.unit, WeightUnit::Gram);
        assert_eq!(draft.material, MATERIALS[0]);
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let result: Result<ProductDraft, _> = serde_json::from_value(json!({
            "dimensions": { "unit": "cm" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_field_value_by_wire_name() {
        let product = Product::create(bracket_draft());
        assert_eq!(
            product.field_value("partNumber"),
            Some(FieldValue::from("BRK-001-AL"))
        );
        assert_eq!(
            product.field_value("dimensions.length"),
            Some(FieldValue::Number(150.0))
        );
        assert_eq!(
            product.field_value("lifecycleStatus"),
            Some(FieldValue::from("Design"))
        );
        assert_eq!(product.field_value("colour"), None);
    }

    #[test]
    fn test_searchable_fields_are_text() {
        let product = Product::create(bracket_draft());
        for field in SEARCHABLE_FIELDS {
            let value = product.field_value(field);
            assert!(
                value.as_ref().and_then(|v| v.as_string()).is_some(),
                "{} should be a text field",
                field
            );
        }
    }

    #[test]
    fn test_entity_accessors() {
        let product = Product::create(bracket_draft());
        assert_eq!(product.id(), product.id);
        assert_eq!(product.updated_at(), product.last_modified());
    }
}
