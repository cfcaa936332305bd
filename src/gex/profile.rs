//! A generated ladder together with the inputs that produced it.

use super::{
    GeneratorParams, GexError, GexSummary, NamedLevels, StrikeLevel, generate_levels,
    resolve_reference_price, summarize,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label attached to every profile leaving the process.
pub const SYNTHETIC_DISCLAIMER: &str = "Synthetic display data derived from named price levels; \
     magnitudes and statistics do not reflect real open interest.";

/// Generated GEX ladder plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GexProfile {
    /// Price the ladder is centred on after fallbacks.
    pub reference_price: f64,
    /// Anchors after sanitization.
    pub named_levels: NamedLevels,
    /// Parameters used.
    pub params: GeneratorParams,
    /// Strikes, highest first.
    pub levels: Vec<StrikeLevel>,
    /// Always true: the values are simulated.
    pub synthetic: bool,
    /// Human-readable provenance note.
    pub disclaimer: String,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
}

impl GexProfile {
    /// Resolves the reference price and generates the ladder.
    ///
    /// # Arguments
    /// * `reference_price` - Live price, if known.
    /// * `named` - Raw anchors; zero or negative values are treated as absent.
    /// * `params` - Ladder parameters.
    /// * `fallback_reference_price` - Baseline used when neither the reference
    ///   price nor the gamma flip is usable.
    ///
    /// # Errors
    /// Returns [`GexError::Validation`] if generation rejects the inputs.
    pub fn build(
        reference_price: Option<f64>,
        named: &NamedLevels,
        params: GeneratorParams,
        fallback_reference_price: f64,
    ) -> Result<Self, GexError> {
        let named_levels = named.sanitized();
        let reference_price =
            resolve_reference_price(reference_price, &named_levels, fallback_reference_price);
        let levels = generate_levels(reference_price, &named_levels, &params)?;

        Ok(Self {
            reference_price,
            named_levels,
            params,
            levels,
            synthetic: true,
            disclaimer: SYNTHETIC_DISCLAIMER.to_string(),
            generated_at: Utc::now(),
        })
    }

    /// Summary of the ladder.
    #[must_use]
    pub fn summary(&self) -> GexSummary {
        summarize(self.reference_price, &self.named_levels, &self.levels)
    }
}
