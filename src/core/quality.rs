//! Data completeness scoring (ISO 8000 style data-quality indicator)
//!
//! A product's score is the share of a fixed checklist of fields that are
//! filled, as a whole percentage. The checklist order and size are part of
//! the contract: changing either changes every score.

use crate::core::product::Product;
use serde::Serialize;

/// Fields counted by the completeness score, by wire name, in order
pub const CHECKLIST: [&str; 11] = [
    "gtin",
    "partNumber",
    "name",
    "description",
    "material",
    "dimensions.length",
    "weight.value",
    "supplier",
    "manufacturer",
    "dataOwner",
    "sourceSystem",
];

/// Completeness of a product as an integer percentage in `0..=100`.
///
/// `round(100 * filled / 11)` with halves rounded away from zero, so
/// 5 filled fields give 45 and 6 give 55.
pub fn completeness_score(product: &Product) -> u8 {
    percentage(filled_fields(product).count())
}

fn filled_fields(product: &Product) -> impl Iterator<Item = &'static str> + '_ {
    CHECKLIST.into_iter().filter(move |field| {
        product
            .field_value(field)
            .is_some_and(|value| value.is_filled())
    })
}

fn percentage(filled: usize) -> u8 {
    let ratio = filled as f64 / CHECKLIST.len() as f64;
    (ratio * 100.0).round() as u8
}

/// Presentation tier of a completeness score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl QualityTier {
    /// `< 50` is low, `50..80` medium, `>= 80` high
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=49 => QualityTier::Low,
            50..=79 => QualityTier::Medium,
            _ => QualityTier::High,
        }
    }

    /// Color token for the score gauge
    pub fn color(&self) -> &'static str {
        match self {
            QualityTier::Low => "text-red-500",
            QualityTier::Medium => "text-yellow-500",
            QualityTier::High => "text-green-500",
        }
    }
}

/// Full completeness breakdown shown next to a product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub score: u8,
    pub tier: QualityTier,
    pub color: &'static str,
    pub filled: usize,
    pub total: usize,
    /// Checklist fields still empty, in checklist order
    pub missing: Vec<&'static str>,
}

impl QualityReport {
    pub fn for_product(product: &Product) -> Self {
        let filled: Vec<&'static str> = filled_fields(product).collect();
        let missing = CHECKLIST
            .into_iter()
            .filter(|field| !filled.contains(field))
            .collect();
        let score = percentage(filled.len());
        let tier = QualityTier::for_score(score);

        Self {
            score,
            tier,
            color: tier.color(),
            filled: filled.len(),
            total: CHECKLIST.len(),
            missing,
        }
    }
}
