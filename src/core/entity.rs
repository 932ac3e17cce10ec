//! Entity trait shared by stored records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for records held by a store.
///
/// Every entity has:
/// - id: unique, assigned once at creation
/// - updated_at: last modification timestamp, never earlier than creation
pub trait Entity: Clone + Send + Sync + 'static {
    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;
}
