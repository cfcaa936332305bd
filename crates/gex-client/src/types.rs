//! Request and response types for the GEX Levels API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


// ============================================================================
// Level Types
// ============================================================================

/// Category assigned to a generated strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Wall.
    #[serde(rename = "WALL")]
    Wall,
    /// Zero-gamma point.
    #[serde(rename = "ZERO-GAMMA")]
    ZeroGamma,
    /// Magnet.
    #[serde(rename = "MAGNET")]
    Magnet,
    /// Nothing notable.
    #[serde(rename = "NORMAL")]
    Normal,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wall => write!(f, "WALL"),
            Self::ZeroGamma => write!(f, "ZERO-GAMMA"),
            Self::Magnet => write!(f, "MAGNET"),
            Self::Normal => write!(f, "NORMAL"),
        }
    }
}

/// Side a classified strike is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Call-dominant.
    Call,
    /// Put-dominant.
    Put,
    /// Gamma flip.
    Flip,
}

/// Gamma regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GammaRegime {
    /// Reference at or above the flip.
    Positive,
    /// Reference below the flip.
    Negative,
    /// No flip known.
    Unknown,
}

/// Named price anchors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedLevels {
    /// Gamma flip price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma_flip: Option<f64>,
    /// Call wall price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_wall: Option<f64>,
    /// Put wall price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put_wall: Option<f64>,
    /// High-volume level price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_volume_level: Option<f64>,
    /// Max pain price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pain: Option<f64>,
}

/// Generator parameters echoed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Strike spacing.
    pub interval: f64,
    /// Half-width of the ladder.
    pub span: f64,
    /// Wall magnitude threshold.
    pub wall_threshold: f64,
    /// Magnet magnitude threshold.
    pub magnet_threshold: f64,
    /// Noise scale constant.
    pub noise_scale: f64,
    /// Magnitude decay width.
    pub decay_width: f64,
}

/// One generated strike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeLevel {
    /// Strike price.
    pub strike: f64,
    /// Signed synthetic magnitude.
    pub gex_value: f64,
    /// Category.
    pub classification: Classification,
    /// Attributed side.
    pub role: Option<Role>,
    /// Call share in percent.
    pub call_pct: f64,
    /// Put share in percent.
    pub put_pct: f64,
    /// Absolute magnitude in display units.
    pub mass: f64,
    /// Magnitude weighted by integrity.
    pub effective: f64,
    /// Integrity in percent.
    pub integrity_pct: f64,
    /// Hold chance in percent.
    pub hold_pct: f64,
    /// Break chance in percent.
    pub break_pct: f64,
    /// Signed distance from the reference price.
    pub distance: f64,
}

/// A wall picked out of a ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallLevel {
    /// Strike price.
    pub strike: f64,
    /// Signed synthetic magnitude.
    pub gex_value: f64,
    /// Signed distance from the reference price.
    pub distance: f64,
}

// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

// ============================================================================
// Levels
// ============================================================================

/// Geometry overrides sent as query parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LevelsQuery {
    /// Strike spacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    /// Half-width of the ladder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<f64>,
}

/// Request to generate levels from explicit inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateLevelsRequest {
    /// Live reference price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_price: Option<f64>,
    /// Named anchors.
    #[serde(default)]
    pub named_levels: NamedLevels,
    /// Strike spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    /// Half-width of the ladder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<f64>,
}

/// Generated levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelsResponse {
    /// Symbol the anchors were read from.
    pub symbol: Option<String>,
    /// Reference price after fallbacks.
    pub reference_price: f64,
    /// Sanitized anchors.
    pub named_levels: NamedLevels,
    /// Parameters used.
    pub params: GeneratorParams,
    /// Strikes, highest first.
    pub levels: Vec<StrikeLevel>,
    /// Always true.
    pub synthetic: bool,
    /// Provenance note.
    pub disclaimer: String,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
}

impl LevelsResponse {
    /// Finds the record for a strike.
    #[must_use]
    pub fn level_at(&self, strike: f64) -> Option<&StrikeLevel> {
        self.levels.iter().find(|l| l.strike == strike)
    }
}

/// Summary of generated levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Symbol.
    pub symbol: String,
    /// Always true.
    pub synthetic: bool,
    /// Provenance note.
    pub disclaimer: String,
    /// Reference price.
    pub reference_price: f64,
    /// Number of strikes.
    pub strike_count: usize,
    /// Number of walls.
    pub wall_count: usize,
    /// Number of zero-gamma strikes.
    pub zero_gamma_count: usize,
    /// Number of magnets.
    pub magnet_count: usize,
    /// Number of normal strikes.
    pub normal_count: usize,
    /// Sum of signed magnitudes.
    pub net_gex: f64,
    /// Strongest call wall.
    pub strongest_call_wall: Option<WallLevel>,
    /// Strongest put wall.
    pub strongest_put_wall: Option<WallLevel>,
    /// Gamma regime.
    pub regime: GammaRegime,
}

// ============================================================================
// Symbols
// ============================================================================

/// Request to create or replace the anchors of a symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertSymbolRequest {
    /// Live reference price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_price: Option<f64>,
    /// Named anchors.
    #[serde(default)]
    pub named_levels: NamedLevels,
}

/// Stored anchors for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolSnapshot {
    /// Symbol.
    pub symbol: String,
    /// Live reference price.
    pub reference_price: Option<f64>,
    /// Named anchors.
    pub named_levels: NamedLevels,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// List of symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolsListResponse {
    /// Symbols.
    pub symbols: Vec<SymbolSnapshot>,
}

/// Response for deleting a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSymbolResponse {
    /// Whether the symbol was removed.
    pub success: bool,
    /// Message describing the result.
    pub message: String,
}
