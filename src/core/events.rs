//! Change notifications for the product store
//!
//! Handlers publish a [`ProductEvent`] after every successful save so that
//! list and detail views can re-render from the store.
//!
//! ```text
//! POST/PUT handler ──▶ EventBus::publish() ──▶ broadcast channel ──▶ view subscribers
//! ```

use crate::core::entity::Entity;
use crate::core::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// A product was created or edited
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ProductEvent {
    Created { product_id: Uuid, product: Product },
    Updated { product_id: Uuid, product: Product },
}

impl ProductEvent {
    pub fn created(product: &Product) -> Self {
        ProductEvent::Created {
            product_id: product.id(),
            product: product.clone(),
        }
    }

    pub fn updated(product: &Product) -> Self {
        ProductEvent::Updated {
            product_id: product.id(),
            product: product.clone(),
        }
    }

    pub fn product_id(&self) -> Uuid {
        match self {
            ProductEvent::Created { product_id, .. } | ProductEvent::Updated { product_id, .. } => {
                *product_id
            }
        }
    }

    /// The action name (created, updated)
    pub fn action(&self) -> &str {
        match self {
            ProductEvent::Created { .. } => "created",
            ProductEvent::Updated { .. } => "updated",
        }
    }
}

/// Envelope wrapping an event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    pub event: ProductEvent,
}

impl EventEnvelope {
    pub fn new(event: ProductEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone; every clone publishes into the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// Receivers that fall more than `capacity` events behind get `Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Never fails. Returns the number of receivers reached; with no
    /// subscribers the event is dropped and 0 is returned.
    pub fn publish(&self, event: ProductEvent) -> usize {
        tracing::debug!(
            action = event.action(),
            product_id = %event.product_id(),
            "publishing product event"
        );
        self.sender.send(EventEnvelope::new(event)).unwrap_or(0)
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}
