//! Validation pipeline for product drafts

use super::{filters, validators};
use crate::core::error::FieldValidationError;
use serde_json::Value;

type Filter = Box<dyn Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync>;
type Validator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// String fields of a draft that are trimmed before validation
const TEXT_FIELDS: &[&str] = &[
    "gtin",
    "partNumber",
    "name",
    "description",
    "material",
    "supplier",
    "manufacturer",
    "dataOwner",
    "sourceSystem",
    "imageUrl",
];

/// Numeric fields of a draft that must not be negative
const MEASURE_FIELDS: &[&str] = &[
    "dimensions.length",
    "dimensions.width",
    "dimensions.height",
    "weight.value",
];

/// Ordered filters and validators keyed by dotted field path
///
/// Filters run first and rewrite the payload in place; validators then see
/// the filtered values. All validator failures are collected.
#[derive(Default)]
pub struct DraftValidationConfig {
    filters: Vec<(&'static str, Filter)>,
    validators: Vec<(&'static str, Validator)>,
}

impl DraftValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules applied to every product save
    pub fn product_draft() -> Self {
        let mut config = Self::new();
        for &field in TEXT_FIELDS {
            config = config.add_filter(field, filters::trim());
        }
        for field in ["name", "partNumber", "gtin"] {
            config = config.add_validator(field, validators::required());
        }
        for &field in MEASURE_FIELDS {
            config = config.add_validator(field, validators::non_negative());
        }
        config.add_validator("imageUrl", validators::http_url())
    }

    pub fn add_filter<F>(mut self, field: &'static str, filter: F) -> Self
    where
        F: Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.filters.push((field, Box::new(filter)));
        self
    }

    pub fn add_validator<V>(mut self, field: &'static str, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators.push((field, Box::new(validator)));
        self
    }

    /// Filter then validate a JSON payload
    pub fn validate_and_filter(
        &self,
        mut payload: Value,
    ) -> Result<Value, Vec<FieldValidationError>> {
        let mut errors = Vec::new();

        for (field, filter) in &self.filters {
            let Some(slot) = payload.pointer_mut(&pointer(field)) else {
                continue;
            };
            match filter(field, slot.take()) {
                Ok(filtered) => *slot = filtered,
                Err(e) => errors.push(FieldValidationError::new(*field, e.to_string())),
            }
        }

        for (field, validator) in &self.validators {
            let value = payload.pointer(&pointer(field)).unwrap_or(&Value::Null);
            if let Err(message) = validator(field, value) {
                errors.push(FieldValidationError::new(*field, message));
            }
        }

        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(errors)
        }
    }
}

/// `dimensions.length` -> `/dimensions/length`
fn pointer(field: &str) -> String {
    format!("/{}", field.replace('.', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "  Main Mounting Bracket ",
            "partNumber": "BRK-001-AL",
            "gtin": "07891234567895",
            "dimensions": { "length": 150, "width": 75, "height": 50, "unit": "mm" },
            "weight": { "value": 0.35, "unit": "kg" },
            "imageUrl": "https://picsum.photos/seed/brk/600/400"
        })
    }

    #[test]
    fn test_valid_payload_is_trimmed() {
        let config = DraftValidationConfig::product_draft();
        let filtered = config.validate_and_filter(valid_payload()).unwrap();
        assert_eq!(filtered["name"], "Main Mounting Bracket");
        assert_eq!(filtered["dimensions"]["length"], 150);
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let config = DraftValidationConfig::product_draft();
        let errors = config
            .validate_and_filter(json!({ "name": "   " }))
            .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "partNumber", "gtin"]);
    }

    #[test]
    fn test_negative_measure_is_rejected() {
        let config = DraftValidationConfig::product_draft();
        let mut payload = valid_payload();
        payload["weight"]["value"] = json!(-1);
        let errors = config.validate_and_filter(payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "weight.value");
    }

    #[test]
    fn test_bad_image_url_is_rejected() {
        let config = DraftValidationConfig::product_draft();
        let mut payload = valid_payload();
        payload["imageUrl"] = json!("ftp://files.example.com/a.png");
        let errors = config.validate_and_filter(payload).unwrap_err();
        assert_eq!(errors[0].field, "imageUrl");
    }

    #[test]
    fn test_pointer_translation() {
        assert_eq!(pointer("name"), "/name");
        assert_eq!(pointer("dimensions.length"), "/dimensions/length");
    }
}
