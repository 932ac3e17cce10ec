//! HTTP handlers for the product catalog and description actions

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::views::{ProductDetail, ProductSummary, StatusOption};
use crate::core::entity::Entity;
use crate::core::error::{PdmError, ProductError, ValidationError};
use crate::core::events::{EventBus, ProductEvent};
use crate::core::product::{Product, SEARCHABLE_FIELDS};
use crate::core::quality::QualityReport;
use crate::core::service::ProductService;
use crate::core::validation::{JsonBody, ValidatedDraft};
use crate::description::{DescriptionService, ProductAttributes, render_markdown};

/// Application state shared across catalog handlers
#[derive(Clone)]
pub struct CatalogState {
    pub products: Arc<dyn ProductService>,
    pub descriptions: DescriptionService,
    /// Material catalog offered by the form
    pub materials: Arc<Vec<String>>,
    /// Optional event bus; saves are published when present
    pub event_bus: Option<Arc<EventBus>>,
}

impl CatalogState {
    fn publish(&self, event: ProductEvent) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }

    async fn find(&self, id: &str) -> Result<Product, PdmError> {
        let id = Uuid::parse_str(id)?;
        self.products
            .get(&id)
            .await?
            .ok_or_else(|| ProductError::NotFound { id }.into())
    }
}

/// Query parameters for the product list
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Field to search; defaults to `name` when `q` is given
    pub field: Option<String>,
    pub q: Option<String>,
}

/// Request body for the standardize action
#[derive(Debug, Deserialize)]
pub struct StandardizeRequest {
    #[serde(default)]
    pub text: String,
}

/// List products, optionally filtered by a case-insensitive search
pub async fn list_products(
    State(state): State<CatalogState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, PdmError> {
    let products = match query.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => {
            let field = query.field.as_deref().unwrap_or("name");
            if !SEARCHABLE_FIELDS.contains(&field) {
                return Err(ValidationError::UnknownField {
                    field: field.to_string(),
                }
                .into());
            }
            state.products.search(field, q).await?
        }
        None => state.products.list().await?,
    };

    let summaries: Vec<ProductSummary> = products.iter().map(ProductSummary::from).collect();

    Ok(Json(json!({
        "products": summaries,
        "count": summaries.len(),
    })))
}

/// Create a product from a validated draft
pub async fn create_product(
    State(state): State<CatalogState>,
    ValidatedDraft(draft): ValidatedDraft,
) -> Result<impl IntoResponse, PdmError> {
    let product = state.products.create(draft).await?;

    tracing::info!(product_id = %product.id(), part_number = %product.part_number, "product created");
    state.publish(ProductEvent::created(&product));

    Ok((StatusCode::CREATED, Json(product)))
}

/// Detail view of a single product
pub async fn get_product(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>, PdmError> {
    let product = state.find(&id).await?;
    Ok(Json(ProductDetail::from(&product)))
}

/// Replace the editable attributes of a product
pub async fn update_product(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
    ValidatedDraft(draft): ValidatedDraft,
) -> Result<Json<Product>, PdmError> {
    let id = Uuid::parse_str(&id)?;
    let product = state.products.update(&id, draft).await?;

    tracing::info!(product_id = %id, "product updated");
    state.publish(ProductEvent::updated(&product));

    Ok(Json(product))
}

/// Completeness breakdown of a product
pub async fn get_quality(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<QualityReport>, PdmError> {
    let product = state.find(&id).await?;
    Ok(Json(QualityReport::for_product(&product)))
}

/// Editable draft of a product, to pre-fill the edit form
pub async fn get_draft(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PdmError> {
    let product = state.find(&id).await?;
    Ok(Json(product.draft()))
}

pub async fn list_materials(State(state): State<CatalogState>) -> Json<Value> {
    Json(json!({ "materials": state.materials.as_ref() }))
}

pub async fn list_statuses() -> Json<Value> {
    Json(json!({ "statuses": StatusOption::all() }))
}

/// Standardize a free-text description; returns Markdown and sanitized HTML
pub async fn standardize_description(
    State(state): State<CatalogState>,
    JsonBody(request): JsonBody<StandardizeRequest>,
) -> Result<Json<Value>, PdmError> {
    let markdown = state.descriptions.standardize(&request.text).await?;
    let html = render_markdown(&markdown);

    Ok(Json(json!({
        "markdown": markdown,
        "html": html,
    })))
}

/// Generate a description from the attributes entered so far
pub async fn generate_description(
    State(state): State<CatalogState>,
    JsonBody(attributes): JsonBody<ProductAttributes>,
) -> Result<Json<Value>, PdmError> {
    let description = state
        .descriptions
        .generate_from_attributes(&attributes)
        .await?;

    Ok(Json(json!({ "description": description })))
}
