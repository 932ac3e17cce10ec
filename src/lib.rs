//! # PDM-RS
//!
//! Core of a product master-data editor: part records with governance
//! metadata, a data-completeness score, and LLM-assisted description
//! standardization, exposed as a REST API.
//!
//! ## Features
//!
//! - **Product records**: identity, GS1 GTIN, dimensions, weight, lifecycle status
//! - **Completeness score**: 11-field checklist, whole-percent score with tiers
//! - **Description service**: standardize free text or generate from attributes
//! - **Sanitized Markdown**: model output rendered to HTML through one boundary
//! - **Validated drafts**: trimming and field rules before anything is stored
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pdm::prelude::*;
//!
//! let config = PdmConfig::load(None)?.with_api_key(api_key);
//!
//! ServerBuilder::from_config(&config)?
//!     .with_product_service(InMemoryProductService::new())
//!     .serve(&config.server.bind)
//!     .await?;
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod description;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Dimensions, Entity, EventBus, EventEnvelope, FieldValue, LengthUnit, LifecycleStatus,
        MATERIALS, PdmError, PdmResult, Product, ProductDraft, ProductEvent, ProductService,
        QualityReport, QualityTier, StatusStyle, Weight, WeightUnit, completeness_score,
        validation::{DraftValidationConfig, JsonBody, ValidatedDraft},
    };

    // === Description ===
    pub use crate::description::{
        DescriptionError, DescriptionService, GeminiConfig, GeminiGenerator, ProductAttributes,
        SanitizedHtml, TextGenerator, render_markdown,
    };

    // === Catalog ===
    pub use crate::catalog::{
        CatalogState, PanelState, ProductDetail, ProductSummary, RequestPanel, StatusOption,
    };

    // === Storage ===
    pub use crate::storage::InMemoryProductService;

    // === Config ===
    pub use crate::config::{PdmConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{get, post, put},
    };
}
