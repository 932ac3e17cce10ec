//! Typed error handling for the PDM core
//!
//! Every failure that can reach an HTTP client is expressed as a [`PdmError`],
//! so handlers can match on the category instead of a generic
//! `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`ProductError`]: product store operations (lookup, save)
//! - [`ValidationError`]: draft validation and malformed input
//! - [`ConfigError`]: configuration parsing and missing settings
//! - [`DescriptionError`]: description standardization/generation failures
//! - [`StorageError`]: store backend failures
//!
//! # Example
//!
//! ```rust,ignore
//! use pdm::prelude::*;
//!
//! match service.get(&id).await? {
//!     Some(product) => Ok(product),
//!     None => Err(PdmError::Product(ProductError::NotFound { id })),
//! }
//! ```

use crate::description::DescriptionError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type of the crate
#[derive(Debug)]
pub enum PdmError {
    /// Product store errors
    Product(ProductError),

    /// Validation errors
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),

    /// Description service errors
    Description(DescriptionError),

    /// Storage backend errors
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for PdmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdmError::Product(e) => write!(f, "{}", e),
            PdmError::Validation(e) => write!(f, "{}", e),
            PdmError::Config(e) => write!(f, "{}", e),
            PdmError::Description(e) => write!(f, "{}", e),
            PdmError::Storage(e) => write!(f, "{}", e),
            PdmError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PdmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PdmError::Product(e) => Some(e),
            PdmError::Validation(e) => Some(e),
            PdmError::Config(e) => Some(e),
            PdmError::Description(e) => Some(e),
            PdmError::Storage(e) => Some(e),
            PdmError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PdmError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PdmError::Product(e) => e.status_code(),
            PdmError::Validation(e) => e.status_code(),
            PdmError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PdmError::Description(e) => match e {
                DescriptionError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_GATEWAY,
            },
            PdmError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PdmError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PdmError::Product(e) => e.error_code(),
            PdmError::Validation(e) => e.error_code(),
            PdmError::Config(_) => "CONFIG_ERROR",
            PdmError::Description(e) => e.error_code(),
            PdmError::Storage(_) => "STORAGE_ERROR",
            PdmError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PdmError::Product(ProductError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            PdmError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for PdmError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Product Errors
// =============================================================================

/// Errors related to product store operations
#[derive(Debug)]
pub enum ProductError {
    /// Product was not found
    NotFound { id: Uuid },

    /// A product with this id is already stored
    AlreadyExists { id: Uuid },
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductError::NotFound { id } => write!(f, "product with id '{}' not found", id),
            ProductError::AlreadyExists { id } => {
                write!(f, "product with id '{}' already exists", id)
            }
        }
    }
}

impl std::error::Error for ProductError {}

impl ProductError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound { .. } => StatusCode::NOT_FOUND,
            ProductError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ProductError::NotFound { .. } => "PRODUCT_NOT_FOUND",
            ProductError::AlreadyExists { .. } => "PRODUCT_ALREADY_EXISTS",
        }
    }
}

impl From<ProductError> for PdmError {
    fn from(err: ProductError) -> Self {
        PdmError::Product(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON body
    InvalidJson { message: String },

    /// Invalid UUID in a path or query
    InvalidUuid { value: String },

    /// Unknown field name used for search
    UnknownField { field: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => write!(f, "Invalid JSON: {}", message),
            ValidationError::InvalidUuid { value } => write!(f, "Invalid UUID: {}", value),
            ValidationError::UnknownField { field } => write!(f, "Unknown field: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidUuid { .. } => "INVALID_UUID",
            ValidationError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}

impl From<ValidationError> for PdmError {
    fn from(err: ValidationError) -> Self {
        PdmError::Validation(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Failed to read a configuration file
    IoError { message: String },

    /// A required setting is missing
    MissingSetting { key: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError {
                file: Some(file),
                message,
            } => write!(f, "Failed to parse config file '{}': {}", file, message),
            ConfigError::ParseError {
                file: None,
                message,
            } => write!(f, "Failed to parse config: {}", message),
            ConfigError::IoError { message } => write!(f, "Config I/O error: {}", message),
            ConfigError::MissingSetting { key } => {
                write!(f, "Missing configuration setting '{}'", key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PdmError {
    fn from(err: ConfigError) -> Self {
        PdmError::Config(err)
    }
}

// =============================================================================
// Description Errors
// =============================================================================

impl From<DescriptionError> for PdmError {
    fn from(err: DescriptionError) -> Self {
        PdmError::Description(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the store backend
#[derive(Debug)]
pub enum StorageError {
    /// A lock guarding the store was poisoned
    Poisoned { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Poisoned { message } => write!(f, "Store lock poisoned: {}", message),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for PdmError {
    fn from(err: StorageError) -> Self {
        PdmError::Storage(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for PdmError {
    fn from(err: serde_json::Error) -> Self {
        PdmError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<axum::extract::rejection::JsonRejection> for PdmError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        PdmError::Validation(ValidationError::InvalidJson {
            message: rejection.body_text(),
        })
    }
}

impl From<std::io::Error> for PdmError {
    fn from(err: std::io::Error) -> Self {
        PdmError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for PdmError {
    fn from(err: serde_yaml::Error) -> Self {
        PdmError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<uuid::Error> for PdmError {
    fn from(err: uuid::Error) -> Self {
        PdmError::Validation(ValidationError::InvalidUuid {
            value: err.to_string(),
        })
    }
}

/// Store traits return `anyhow::Result`; typed errors carried inside are
/// recovered here, anything else becomes `Internal`.
impl From<anyhow::Error> for PdmError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<PdmError>() {
            Ok(pdm) => return pdm,
            Err(err) => err,
        };
        let err = match err.downcast::<ProductError>() {
            Ok(product) => return PdmError::Product(product),
            Err(err) => err,
        };
        match err.downcast::<StorageError>() {
            Ok(storage) => PdmError::Storage(storage),
            Err(err) => PdmError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for PDM operations
pub type PdmResult<T> = Result<T, PdmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_not_found_display_and_status() {
        let err = PdmError::Product(ProductError::NotFound { id: Uuid::nil() });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "PRODUCT_NOT_FOUND");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_field_errors_are_unprocessable_with_details() {
        let err = PdmError::Validation(ValidationError::FieldErrors(vec![
            FieldValidationError::new("name", "is required"),
        ]));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = err.to_response();
        assert_eq!(response.code, "VALIDATION_ERROR");
        let details = response.details.unwrap();
        assert_eq!(details["fields"][0]["field"], "name");
    }

    #[test]
    fn test_description_failure_is_bad_gateway() {
        let err = PdmError::from(DescriptionError::Standardization);
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_code(), "STANDARDIZATION_FAILED");
    }

    #[test]
    fn test_anyhow_recovers_typed_product_error() {
        let id = Uuid::new_v4();
        let err: anyhow::Error = ProductError::NotFound { id }.into();
        match PdmError::from(err) {
            PdmError::Product(ProductError::NotFound { id: found }) => assert_eq!(found, id),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_anyhow_plain_message_becomes_internal() {
        let err = PdmError::from(anyhow::anyhow!("boom"));
        assert!(matches!(err, PdmError::Internal(ref m) if m == "boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
