//! Reusable field validators
//!
//! Each validator receives the field name and its raw JSON value and returns
//! a human-readable message on failure.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Validator: field must be present and, for strings, non-blank
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Err(format!("'{}' is required", field)),
        Value::String(s) if s.trim().is_empty() => Err(format!("'{}' is required", field)),
        _ => Ok(()),
    }
}

/// Validator: number must not be negative
///
/// Numeric strings are checked too; anything else is left to the lenient
/// decoder, which turns it into zero.
pub fn non_negative() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match number {
            Some(num) if num < 0.0 => Err(format!(
                "'{}' must not be negative (value: {})",
                field, num
            )),
            _ => Ok(()),
        }
    }
}

/// Validator: non-empty strings must be http(s) URLs
pub fn http_url() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value.as_str() {
        Some(s) if !s.is_empty() && !is_valid_url(s) => {
            Err(format!("'{}' must be an http(s) URL (value: {})", field, s))
        }
        _ => Ok(()),
    }
}

fn is_valid_url(url: &str) -> bool {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = URL_REGEX.get_or_init(|| {
        Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("URL pattern is valid")
    });
    regex.is_match(url)
}
