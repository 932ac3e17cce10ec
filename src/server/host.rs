//! Server host holding the application state
//!
//! The host is transport-agnostic: exposures read the services from it and
//! build their own routers.

use crate::catalog::CatalogState;
use crate::core::events::EventBus;
use crate::core::service::ProductService;
use crate::description::DescriptionService;
use std::sync::Arc;

/// Host context containing all application state
pub struct ServerHost {
    /// Product store
    pub products: Arc<dyn ProductService>,

    /// Description standardization/generation
    pub descriptions: DescriptionService,

    /// Material catalog offered by the product form
    pub materials: Arc<Vec<String>>,

    /// Optional event bus; saves are published when present
    pub event_bus: Option<Arc<EventBus>>,
}

impl ServerHost {
    pub fn new(
        products: Arc<dyn ProductService>,
        descriptions: DescriptionService,
        materials: Vec<String>,
    ) -> Self {
        Self {
            products,
            descriptions,
            materials: Arc::new(materials),
            event_bus: None,
        }
    }

    /// Set the event bus for change notifications
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(Arc::new(event_bus));
        self
    }

    /// Get a reference to the event bus (if configured)
    pub fn event_bus(&self) -> Option<&Arc<EventBus>> {
        self.event_bus.as_ref()
    }

    /// Handler state for the catalog routes
    pub fn catalog_state(&self) -> CatalogState {
        CatalogState {
            products: self.products.clone(),
            descriptions: self.descriptions.clone(),
            materials: self.materials.clone(),
            event_bus: self.event_bus.clone(),
        }
    }
}
