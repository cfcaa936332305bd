//! Request and response models for the REST API.

use crate::gex::{GeneratorParams, GexProfile, GexSummary, NamedLevels, SYNTHETIC_DISCLAIMER};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Overrides for the ladder geometry.
///
/// Absent fields keep the server defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, ToSchema)]
pub struct LevelsQuery {
    /// Strike spacing (optional).
    #[serde(default)]
    pub interval: Option<f64>,
    /// Half-width of the ladder (optional).
    #[serde(default)]
    pub span: Option<f64>,
}

impl LevelsQuery {
    /// Applies the overrides to `base`.
    #[must_use]
    pub fn apply(&self, base: GeneratorParams) -> GeneratorParams {
        GeneratorParams {
            interval: self.interval.unwrap_or(base.interval),
            span: self.span.unwrap_or(base.span),
            ..base
        }
    }
}

/// Request to generate levels from explicit inputs.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct GenerateLevelsRequest {
    /// Live reference price. Falls back to the gamma flip, then the server baseline.
    #[serde(default)]
    pub reference_price: Option<f64>,
    /// Named anchors.
    #[serde(default)]
    pub named_levels: NamedLevels,
    /// Strike spacing (optional).
    #[serde(default)]
    pub interval: Option<f64>,
    /// Half-width of the ladder (optional).
    #[serde(default)]
    pub span: Option<f64>,
}

impl GenerateLevelsRequest {
    /// Geometry overrides carried by the request.
    #[must_use]
    pub fn query(&self) -> LevelsQuery {
        LevelsQuery {
            interval: self.interval,
            span: self.span,
        }
    }
}

/// Request to create or replace the anchors of a symbol.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpsertSymbolRequest {
    /// Live reference price, if known.
    #[serde(default)]
    pub reference_price: Option<f64>,
    /// Named anchors.
    #[serde(default)]
    pub named_levels: NamedLevels,
}

/// Stored anchors for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SymbolSnapshot {
    /// Symbol.
    pub symbol: String,
    /// Live reference price, if known.
    pub reference_price: Option<f64>,
    /// Named anchors after sanitization.
    pub named_levels: NamedLevels,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// List of registered symbols.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SymbolsListResponse {
    /// Symbols, sorted alphabetically.
    pub symbols: Vec<SymbolSnapshot>,
}

/// Response for deleting a symbol.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteSymbolResponse {
    /// Whether the symbol was removed.
    pub success: bool,
    /// Message describing the result.
    pub message: String,
}

/// Generated levels.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LevelsResponse {
    /// Symbol the anchors were read from, if any.
    pub symbol: Option<String>,
    /// The generated profile.
    #[serde(flatten)]
    pub profile: GexProfile,
}

/// Summary of generated levels.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    /// Symbol.
    pub symbol: String,
    /// Always true: the values are simulated.
    pub synthetic: bool,
    /// Human-readable provenance note.
    pub disclaimer: String,
    /// Aggregates.
    #[serde(flatten)]
    pub summary: GexSummary,
}

impl SummaryResponse {
    /// Wraps a summary with the synthetic label.
    #[must_use]
    pub fn new(symbol: String, summary: GexSummary) -> Self {
        Self {
            symbol,
            synthetic: true,
            disclaimer: SYNTHETIC_DISCLAIMER.to_string(),
            summary,
        }
    }
}
