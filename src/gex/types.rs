//! Core value types for GEX level generation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category assigned to a generated strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Classification {
    /// Concentrated positioning; price tends to reject.
    #[serde(rename = "WALL")]
    Wall,
    /// Point where aggregate gamma changes sign.
    #[serde(rename = "ZERO-GAMMA")]
    ZeroGamma,
    /// Price tends to be pulled towards this strike.
    #[serde(rename = "MAGNET")]
    Magnet,
    /// Nothing notable.
    #[serde(rename = "NORMAL")]
    Normal,
}

impl Classification {
    /// All classifications, in precedence order.
    pub const ALL: [Classification; 4] = [
        Classification::Wall,
        Classification::ZeroGamma,
        Classification::Magnet,
        Classification::Normal,
    ];

    /// Wire label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wall => "WALL",
            Self::ZeroGamma => "ZERO-GAMMA",
            Self::Magnet => "MAGNET",
            Self::Normal => "NORMAL",
        }
    }

    /// Whether the strike is one a chart should highlight.
    #[must_use]
    pub fn is_key_level(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which side of the book a classified strike is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Call-dominant.
    Call,
    /// Put-dominant.
    Put,
    /// The gamma flip itself.
    Flip,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::Put => write!(f, "PUT"),
            Self::Flip => write!(f, "FLIP"),
        }
    }
}

/// Named price anchors supplied by the caller.
///
/// `None` means the anchor is unknown. Callers that still speak in sentinel
/// zeros should pass their values through [`NamedLevels::sanitized`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedLevels {
    /// Gamma flip (zero-gamma) price.
    #[serde(default)]
    pub gamma_flip: Option<f64>,
    /// Call wall price.
    #[serde(default)]
    pub call_wall: Option<f64>,
    /// Put wall price.
    #[serde(default)]
    pub put_wall: Option<f64>,
    /// High-volume level price.
    #[serde(default)]
    pub high_volume_level: Option<f64>,
    /// Max pain price.
    #[serde(default)]
    pub max_pain: Option<f64>,
}

impl NamedLevels {
    /// Returns a copy where zero, negative and non-finite anchors become `None`.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        fn keep(value: Option<f64>) -> Option<f64> {
            value.filter(|v| v.is_finite() && *v > 0.0)
        }

        Self {
            gamma_flip: keep(self.gamma_flip),
            call_wall: keep(self.call_wall),
            put_wall: keep(self.put_wall),
            high_volume_level: keep(self.high_volume_level),
            max_pain: keep(self.max_pain),
        }
    }

    /// Number of anchors that are set.
    #[must_use]
    pub fn count(&self) -> usize {
        [
            self.gamma_flip,
            self.call_wall,
            self.put_wall,
            self.high_volume_level,
            self.max_pain,
        ]
        .into_iter()
        .flatten()
        .count()
    }
}

/// Parameters controlling the strike ladder and the classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GeneratorParams {
    /// Spacing between strikes in price units.
    pub interval: f64,
    /// Half-width of the ladder around the reference price.
    pub span: f64,
    /// Absolute magnitude above which an unanchored strike is a wall.
    pub wall_threshold: f64,
    /// Absolute magnitude above which an unanchored strike is a magnet.
    pub magnet_threshold: f64,
    /// Scale constant of the noise source.
    pub noise_scale: f64,
    /// Distance over which synthetic magnitude fades out.
    pub decay_width: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            interval: 10.0,
            span: 150.0,
            wall_threshold: 0.5,
            magnet_threshold: 0.3,
            noise_scale: super::NOISE_SCALE,
            decay_width: 75.0,
        }
    }
}

impl GeneratorParams {
    /// Number of strikes on each side of the center strike.
    #[must_use]
    pub fn half_count(&self) -> usize {
        (self.span / self.interval).floor() as usize
    }

    /// Total number of strikes a generation pass produces.
    #[must_use]
    pub fn strike_count(&self) -> usize {
        2 * self.half_count() + 1
    }
}

/// One generated strike with its classification and display statistics.
///
/// All numbers except `strike` and `distance` are synthetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrikeLevel {
    /// Strike price, a multiple of the interval.
    pub strike: f64,
    /// Signed synthetic magnitude; positive is call-dominant.
    pub gex_value: f64,
    /// Assigned category.
    pub classification: Classification,
    /// Attributed side, if any.
    pub role: Option<Role>,
    /// Share of call exposure in percent.
    pub call_pct: f64,
    /// Share of put exposure in percent.
    pub put_pct: f64,
    /// Absolute magnitude in display units.
    pub mass: f64,
    /// Magnitude weighted by integrity.
    pub effective: f64,
    /// Structural integrity in percent.
    pub integrity_pct: f64,
    /// Chance the level holds, in percent.
    pub hold_pct: f64,
    /// Chance the level breaks, in percent.
    pub break_pct: f64,
    /// Signed distance from the reference price.
    pub distance: f64,
}

impl StrikeLevel {
    /// Whether the strike sits above the reference price.
    #[must_use]
    pub fn is_above(&self) -> bool {
        self.distance > 0.0
    }
}
