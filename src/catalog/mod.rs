//! Catalog views, request panel state and HTTP handlers
//!
//! The views are presentation models only; every save goes through the
//! [`ProductService`](crate::core::ProductService) and views re-render from it.

pub mod handlers;
pub mod panel;
pub mod views;

pub use handlers::CatalogState;
pub use panel::{PanelState, RequestPanel, Ticket, UNKNOWN_ERROR_FALLBACK};
pub use views::{ProductDetail, ProductSummary, StatusOption};
