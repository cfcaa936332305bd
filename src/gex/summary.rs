//! Panel summary over a generated ladder.

use super::{Classification, NamedLevels, Role, StrikeLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gamma regime implied by the reference price relative to the flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GammaRegime {
    /// Reference at or above the flip; dealers dampen moves.
    Positive,
    /// Reference below the flip; dealers amplify moves.
    Negative,
    /// No flip known.
    Unknown,
}

impl GammaRegime {
    /// Determines the regime from a reference price and an optional flip.
    #[must_use]
    pub fn from_prices(reference_price: f64, gamma_flip: Option<f64>) -> Self {
        match gamma_flip {
            Some(flip) if reference_price >= flip => Self::Positive,
            Some(_) => Self::Negative,
            None => Self::Unknown,
        }
    }
}

/// A wall picked out of the ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WallLevel {
    /// Strike price.
    pub strike: f64,
    /// Signed synthetic magnitude.
    pub gex_value: f64,
    /// Signed distance from the reference price.
    pub distance: f64,
}

impl From<&StrikeLevel> for WallLevel {
    fn from(level: &StrikeLevel) -> Self {
        Self {
            strike: level.strike,
            gex_value: level.gex_value,
            distance: level.distance,
        }
    }
}

/// Aggregate view of a ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GexSummary {
    /// Reference price the ladder was built around.
    pub reference_price: f64,
    /// Number of strikes.
    pub strike_count: usize,
    /// Number of `WALL` strikes.
    pub wall_count: usize,
    /// Number of `ZERO-GAMMA` strikes.
    pub zero_gamma_count: usize,
    /// Number of `MAGNET` strikes.
    pub magnet_count: usize,
    /// Number of `NORMAL` strikes.
    pub normal_count: usize,
    /// Sum of signed magnitudes.
    pub net_gex: f64,
    /// Call wall with the largest positive magnitude.
    pub strongest_call_wall: Option<WallLevel>,
    /// Put wall with the most negative magnitude.
    pub strongest_put_wall: Option<WallLevel>,
    /// Gamma regime.
    pub regime: GammaRegime,
}

impl GexSummary {
    /// Count for one classification.
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::Wall => self.wall_count,
            Classification::ZeroGamma => self.zero_gamma_count,
            Classification::Magnet => self.magnet_count,
            Classification::Normal => self.normal_count,
        }
    }
}

/// Summarizes a ladder produced by [`super::generate_levels`].
#[must_use]
pub fn summarize(reference_price: f64, named: &NamedLevels, levels: &[StrikeLevel]) -> GexSummary {
    let count_of = |c: Classification| levels.iter().filter(|l| l.classification == c).count();

    let walls = |role: Role| {
        levels
            .iter()
            .filter(move |l| l.classification == Classification::Wall && l.role == Some(role))
    };

    let strongest_call_wall = walls(Role::Call)
        .filter(|l| l.gex_value > 0.0)
        .max_by(|a, b| a.gex_value.total_cmp(&b.gex_value))
        .map(WallLevel::from);
    let strongest_put_wall = walls(Role::Put)
        .filter(|l| l.gex_value < 0.0)
        .min_by(|a, b| a.gex_value.total_cmp(&b.gex_value))
        .map(WallLevel::from);

    let net_gex = levels.iter().fold(0.0, |acc, l| acc + l.gex_value);

    GexSummary {
        reference_price,
        strike_count: levels.len(),
        wall_count: count_of(Classification::Wall),
        zero_gamma_count: count_of(Classification::ZeroGamma),
        magnet_count: count_of(Classification::Magnet),
        normal_count: count_of(Classification::Normal),
        net_gex: (net_gex * 10_000.0).round() / 10_000.0,
        strongest_call_wall,
        strongest_put_wall,
        regime: GammaRegime::from_prices(reference_price, named.gamma_flip),
    }
}
