//! In-memory implementation of ProductService

use crate::core::entity::Entity;
use crate::core::error::{ProductError, StorageError};
use crate::core::product::{Product, ProductDraft};
use crate::core::service::ProductService;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory product store
///
/// Keeps records in insertion order so list views are stable. Uses RwLock for
/// thread-safe access; clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryProductService {
    products: Arc<RwLock<IndexMap<Uuid, Product>>>,
}

impl InMemoryProductService {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with existing records
    ///
    /// Later records with a duplicate id replace earlier ones.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id(), product))
            .collect();
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

fn poisoned(e: impl std::fmt::Display) -> anyhow::Error {
    anyhow!(StorageError::Poisoned {
        message: e.to_string(),
    })
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn create(&self, draft: ProductDraft) -> Result<Product> {
        let product = Product::create(draft);

        let mut products = self.products.write().map_err(poisoned)?;
        if products.contains_key(&product.id()) {
            return Err(ProductError::AlreadyExists { id: product.id() }.into());
        }
        products.insert(product.id(), product.clone());

        tracing::debug!(product_id = %product.id(), "product created");
        Ok(product)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Product>> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, draft: ProductDraft) -> Result<Product> {
        let mut products = self.products.write().map_err(poisoned)?;
        let product = products
            .get_mut(id)
            .ok_or(ProductError::NotFound { id: *id })?;

        product.apply(draft);

        tracing::debug!(product_id = %id, "product updated");
        Ok(product.clone())
    }

    async fn search(&self, field: &str, value: &str) -> Result<Vec<Product>> {
        let needle = value.to_lowercase();
        let products = self.products.read().map_err(poisoned)?;

        Ok(products
            .values()
            .filter(|product| {
                product
                    .field_value(field)
                    .as_ref()
                    .and_then(|v| v.as_string())
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
