//! Service trait for the product store

use crate::core::product::{Product, ProductDraft};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing product records
///
/// Implementations own id and timestamp assignment: `create` builds the
/// record from a draft, `update` merges a draft into an existing record.
/// There is no delete; eviction is the backing store's business.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Create a new product from a draft
    async fn create(&self, draft: ProductDraft) -> Result<Product>;

    /// Get a product by ID
    async fn get(&self, id: &Uuid) -> Result<Option<Product>>;

    /// List all products in insertion order
    async fn list(&self) -> Result<Vec<Product>>;

    /// Merge a draft into an existing product
    ///
    /// Fails with `ProductError::NotFound` if the id is unknown.
    async fn update(&self, id: &Uuid, draft: ProductDraft) -> Result<Product>;

    /// Case-insensitive substring search on a string field (wire name)
    async fn search(&self, field: &str, value: &str) -> Result<Vec<Product>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The trait is object safe and usable behind Arc<dyn ..>
    #[allow(dead_code)]
    fn assert_object_safe(_: &std::sync::Arc<dyn ProductService>) {}

    #[allow(dead_code)]
    async fn generic_create<S>(service: &S, draft: ProductDraft) -> Result<Product>
    where
        S: ProductService,
    {
        service.create(draft).await
    }

    #[test]
    fn test_traits_compile() {}
}
