//! Axum extractors for request bodies
//!
//! `ValidatedDraft` runs the draft validation pipeline on the request body
//! before the handler sees it. `JsonBody` is a plain JSON body whose
//! rejections are reported as `PdmError` like every other failure.

use super::config::DraftValidationConfig;
use crate::core::error::{PdmError, ValidationError};
use crate::core::product::ProductDraft;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// A product draft that passed filtering and validation
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_product(
///     State(state): State<CatalogState>,
///     ValidatedDraft(draft): ValidatedDraft,
/// ) -> Result<Json<Product>, PdmError> {
///     // draft is already trimmed and validated
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedDraft(pub ProductDraft);

impl ValidatedDraft {
    /// Run the product draft rules on a raw JSON payload
    pub fn from_value(payload: Value) -> Result<Self, PdmError> {
        if !payload.is_object() {
            return Err(ValidationError::InvalidJson {
                message: "product draft must be a JSON object".to_string(),
            }
            .into());
        }

        let filtered = DraftValidationConfig::product_draft()
            .validate_and_filter(payload)
            .map_err(ValidationError::FieldErrors)?;

        let draft: ProductDraft = serde_json::from_value(filtered)?;
        Ok(Self(draft))
    }
}

impl<S> FromRequest<S> for ValidatedDraft
where
    S: Send + Sync,
{
    type Rejection = PdmError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state).await?;
        Self::from_value(payload)
    }
}

/// JSON request body that rejects with `INVALID_JSON`
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(Json), rejection(PdmError))]
pub struct JsonBody<T>(pub T);
