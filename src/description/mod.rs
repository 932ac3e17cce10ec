//! LLM-assisted description standardization and generation
//!
//! [`DescriptionService`] owns the fallbacks, prompts and error policy; the
//! actual call goes through a [`TextGenerator`], which is [`GeminiGenerator`]
//! in production and a fake in tests.

pub mod attributes;
pub mod error;
pub mod gemini;
pub mod markdown;
pub mod prompt;

pub use attributes::ProductAttributes;
pub use error::DescriptionError;
pub use gemini::{GeminiConfig, GeminiGenerator};
pub use markdown::{SanitizedHtml, render_markdown};

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Returned by [`DescriptionService::standardize`] for blank input
pub const EMPTY_INPUT_FALLBACK: &str = "Por favor, insira uma descrição para padronizar.";

/// A single-shot prompt-to-text endpoint
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }
}

/// Standardizes and generates product descriptions through a [`TextGenerator`]
///
/// Holds no state besides the generator; concurrent calls are independent.
pub struct DescriptionService<G: ?Sized = dyn TextGenerator> {
    generator: Arc<G>,
}

impl<G: ?Sized> Clone for DescriptionService<G> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
        }
    }
}

impl<G: TextGenerator> DescriptionService<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

impl DescriptionService {
    /// Build a type-erased service around a shared generator
    pub fn shared(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

impl<G: TextGenerator + ?Sized> DescriptionService<G> {
    /// Turn a free-text description into a standardized Markdown description.
    ///
    /// Blank input returns [`EMPTY_INPUT_FALLBACK`] without calling the
    /// generator.
    pub async fn standardize(&self, raw: &str) -> Result<String, DescriptionError> {
        if raw.trim().is_empty() {
            return Ok(EMPTY_INPUT_FALLBACK.to_string());
        }

        match self.generator.generate(&prompt::standardization(raw)).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                tracing::error!(error = ?e, "description standardization call failed");
                Err(classify(e, DescriptionError::Standardization))
            }
        }
    }

    /// Write a short technical description from the attributes entered so far.
    ///
    /// Without a name there is nothing to describe: returns `""` without
    /// calling the generator.
    pub async fn generate_from_attributes(
        &self,
        attributes: &ProductAttributes,
    ) -> Result<String, DescriptionError> {
        if attributes.name().is_none() {
            return Ok(String::new());
        }

        let prompt = prompt::generation(&attributes.to_bullet_list());
        match self.generator.generate(&prompt).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                tracing::error!(error = ?e, "description generation call failed");
                Err(classify(e, DescriptionError::Generation))
            }
        }
    }
}

/// Configuration problems keep their own variant; everything else collapses
/// into the flat `failure`.
fn classify(err: anyhow::Error, failure: DescriptionError) -> DescriptionError {
    match err.downcast::<DescriptionError>() {
        Ok(config @ DescriptionError::Config(_)) => config,
        _ => failure,
    }
}
