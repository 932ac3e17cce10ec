//! Errors surfaced by the description service
//!
//! Upstream causes are logged where they happen and never reach the caller;
//! the two failure variants carry only the flat user-facing message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    /// Standardizing a free-text description failed upstream
    #[error("Falha ao gerar descrição. Verifique o console para mais detalhes.")]
    Standardization,

    /// Generating a description from product attributes failed upstream
    #[error("Failed to generate description. Please check the console for more details.")]
    Generation,

    /// The text-generation endpoint is not usable as configured
    #[error("Description service is not configured: {0}")]
    Config(String),
}

impl DescriptionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DescriptionError::Standardization => "STANDARDIZATION_FAILED",
            DescriptionError::Generation => "GENERATION_FAILED",
            DescriptionError::Config(_) => "DESCRIPTION_CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_flat() {
        assert_eq!(
            DescriptionError::Standardization.to_string(),
            "Falha ao gerar descrição. Verifique o console para mais detalhes."
        );
        assert_eq!(
            DescriptionError::Generation.to_string(),
            "Failed to generate description. Please check the console for more details."
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DescriptionError::Generation.error_code(), "GENERATION_FAILED");
        assert_eq!(
            DescriptionError::Config("missing API key".into()).error_code(),
            "DESCRIPTION_CONFIG_ERROR"
        );
    }
}
