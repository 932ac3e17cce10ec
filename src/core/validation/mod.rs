//! Validation and filtering of product drafts
//!
//! Drafts submitted by the product form are trimmed and checked here before
//! they reach the store.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod validators;

pub use config::DraftValidationConfig;
pub use extractor::{JsonBody, ValidatedDraft};
