//! Core module containing the product model, scoring and store traits

pub mod entity;
pub mod error;
pub mod events;
pub mod field;
pub mod lifecycle;
pub mod product;
pub mod quality;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{PdmError, PdmResult};
pub use events::{EventBus, EventEnvelope, ProductEvent};
pub use field::FieldValue;
pub use lifecycle::{LifecycleStatus, StatusStyle};
pub use product::{
    Dimensions, LengthUnit, MATERIALS, Product, ProductDraft, SEARCHABLE_FIELDS, Weight, WeightUnit,
};
pub use quality::{QualityReport, QualityTier, completeness_score};
pub use service::ProductService;
