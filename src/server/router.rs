//! Router builder for catalog routes

use crate::catalog::handlers::{
    CatalogState, create_product, generate_description, get_draft, get_product, get_quality,
    list_materials, list_products, list_statuses, standardize_description, update_product,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the catalog routes
///
/// - GET /products, POST /products - List/search and create
/// - GET /products/{id}, PUT /products/{id} - Detail view and edit
/// - GET /products/{id}/quality - Completeness report
/// - GET /products/{id}/draft - Edit form pre-fill
/// - GET /materials, GET /lifecycle-statuses - Form option lists
/// - POST /descriptions/standardize, POST /descriptions/generate - Description actions
pub fn build_catalog_routes(state: CatalogState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product).put(update_product))
        .route("/products/{id}/quality", get(get_quality))
        .route("/products/{id}/draft", get(get_draft))
        .route("/materials", get(list_materials))
        .route("/lifecycle-statuses", get(list_statuses))
        .route("/descriptions/standardize", post(standardize_description))
        .route("/descriptions/generate", post(generate_description))
        .with_state(state)
}
