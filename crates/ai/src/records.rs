//! Typed suggestion records and the optional per-field decode step.
//!
//! The HTTP boundary forwards raw array elements exactly as the model
//! produced them (the shape check stops at "is it an array"). Consumers
//! that want partially-malformed output to fail predictably can run
//! [`SuggestionKind::decode`] instead of trusting the raw values.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::InsightError;
use crate::kind::SuggestionKind;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPotential {
    High,
    Medium,
    Low,
}

/// One restock recommendation.
///
/// `product_id` should refer to a catalog entry, but the pipeline does not
/// enforce it; the model's output is trusted after shape validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockSuggestion {
    pub product_id: String,
    pub name: String,
    pub urgency: Urgency,
    pub reason: String,
    pub suggested_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOptimization {
    pub product_id: String,
    pub name: String,
    pub current_price: f64,
    pub suggested_price: f64,
    pub change_percentage: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingProduct {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub growth_potential: GrowthPotential,
    pub trend_analysis: String,
    pub projected_sales_increase: f64,
}

/// Result of decoding a raw suggestion array against its kind's schema.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedSuggestions {
    Restock(Vec<RestockSuggestion>),
    Price(Vec<PriceOptimization>),
    Trending(Vec<TrendingProduct>),
}

impl SuggestionKind {
    /// Decode raw array elements into this kind's record type.
    ///
    /// Fails on the first element that does not match the schema.
    pub fn decode(self, items: &[JsonValue]) -> Result<DecodedSuggestions, InsightError> {
        fn decode_all<T: serde::de::DeserializeOwned>(
            items: &[JsonValue],
        ) -> Result<Vec<T>, InsightError> {
            items
                .iter()
                .map(|item| {
                    serde_json::from_value(item.clone())
                        .map_err(|e| InsightError::Decode(e.to_string()))
                })
                .collect()
        }

        match self {
            SuggestionKind::Restock => decode_all(items).map(DecodedSuggestions::Restock),
            SuggestionKind::Price => decode_all(items).map(DecodedSuggestions::Price),
            SuggestionKind::Trending => decode_all(items).map(DecodedSuggestions::Trending),
        }
    }
}
