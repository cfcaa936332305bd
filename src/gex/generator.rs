//! Strike ladder generation.

use super::{
    Classification, GeneratorParams, GexError, NamedLevels, StrikeLevel, classify,
    noise_with_scale,
};
use tracing::debug;

/// Upper bound on the number of strikes a single pass may produce.
pub const MAX_STRIKES: usize = 10_001;

/// Seed offset for the call/put split.
const SPLIT_SEED_OFFSET: f64 = 1000.0;
/// Seed offset for the integrity percentage.
const INTEGRITY_SEED_OFFSET: f64 = 2000.0;
/// Seed offset for the hold/break percentage.
const HOLD_SEED_OFFSET: f64 = 3000.0;

/// Rounds `value` to `decimals` decimal places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl GeneratorParams {
    /// Validates the parameters.
    ///
    /// # Errors
    /// Returns [`GexError::Validation`] when the interval is not a positive
    /// finite number, the span is negative or non-finite, the decay width or
    /// noise scale is unusable, or the ladder would exceed [`MAX_STRIKES`].
    pub fn validate(&self) -> Result<(), GexError> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(GexError::validation(format!(
                "interval must be a positive finite number, got {}",
                self.interval
            )));
        }
        if !self.span.is_finite() || self.span < 0.0 {
            return Err(GexError::validation(format!(
                "span must be a non-negative finite number, got {}",
                self.span
            )));
        }
        if !self.decay_width.is_finite() || self.decay_width <= 0.0 {
            return Err(GexError::validation(format!(
                "decay_width must be a positive finite number, got {}",
                self.decay_width
            )));
        }
        if !self.noise_scale.is_finite() {
            return Err(GexError::validation("noise_scale must be finite"));
        }
        if !self.wall_threshold.is_finite() || !self.magnet_threshold.is_finite() {
            return Err(GexError::validation("thresholds must be finite"));
        }
        if self.span / self.interval > (MAX_STRIKES / 2) as f64 {
            return Err(GexError::validation(format!(
                "span {} with interval {} exceeds {} strikes",
                self.span, self.interval, MAX_STRIKES
            )));
        }
        Ok(())
    }
}

/// Picks the price the ladder is centred on.
///
/// Uses `reference` when it is a positive finite number, otherwise the gamma
/// flip, otherwise `fallback`.
#[must_use]
pub fn resolve_reference_price(reference: Option<f64>, named: &NamedLevels, fallback: f64) -> f64 {
    let usable = |v: &f64| v.is_finite() && *v > 0.0;
    reference
        .filter(usable)
        .or(named.gamma_flip.filter(usable))
        .unwrap_or(fallback)
}

/// Generates the synthetic strike ladder around `reference_price`.
///
/// Strikes are `round(reference / interval) * interval + k * interval` for
/// `k` in `-n..=n`, `n = floor(span / interval)`, returned highest first.
///
/// # Arguments
/// * `reference_price` - Price the ladder is centred on.
/// * `named` - Anchors used for classification.
/// * `params` - Ladder geometry and thresholds.
///
/// # Errors
/// Returns [`GexError::Validation`] if the reference price is not a positive
/// finite number, the parameters are invalid, or adjacent strikes cannot be
/// told apart at the reference price's magnitude.
pub fn generate_levels(
    reference_price: f64,
    named: &NamedLevels,
    params: &GeneratorParams,
) -> Result<Vec<StrikeLevel>, GexError> {
    if !reference_price.is_finite() || reference_price <= 0.0 {
        return Err(GexError::validation(format!(
            "reference price must be a positive finite number, got {}",
            reference_price
        )));
    }
    params.validate()?;

    let interval = params.interval;
    let center = (reference_price / interval).round() * interval;
    let half = params.half_count() as i64;

    let strikes: Vec<f64> = (-half..=half)
        .rev()
        .map(|k| center + k as f64 * interval)
        .collect();
    if strikes.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err(GexError::validation(format!(
            "interval {} is too fine to separate strikes near {}",
            interval, center
        )));
    }

    let levels: Vec<StrikeLevel> = strikes
        .into_iter()
        .map(|strike| build_level(strike, reference_price, named, params))
        .collect();

    debug!(
        reference_price,
        center,
        strikes = levels.len(),
        "generated synthetic GEX levels"
    );

    Ok(levels)
}

/// Builds one strike record.
fn build_level(
    strike: f64,
    reference_price: f64,
    named: &NamedLevels,
    params: &GeneratorParams,
) -> StrikeLevel {
    let scale = params.noise_scale;
    let distance = strike - reference_price;
    let call_dominant = strike >= reference_price;

    let decay = (-(distance / params.decay_width).powi(2)).exp();
    let n = noise_with_scale(strike, scale);
    let magnitude = if call_dominant {
        decay * (0.6 + 0.4 * n)
    } else {
        decay * (0.4 + 0.6 * n)
    };
    let mut gex_value = round_to(if call_dominant { magnitude } else { -magnitude }, 4);
    if gex_value == 0.0 {
        gex_value = 0.0;
    }

    let (classification, role) = classify(strike, named, gex_value, params);

    let split = noise_with_scale(strike + SPLIT_SEED_OFFSET, scale);
    let tilt = (10.0 + 40.0 * split) * (2.0 * gex_value.abs()).min(1.0);
    let call_pct = if call_dominant {
        50.0 + tilt
    } else {
        50.0 - tilt
    };
    let call_pct = round_to(call_pct.clamp(0.0, 100.0), 1);
    let put_pct = round_to(100.0 - call_pct, 1);

    let integrity_pct = round_to(
        40.0 + 60.0 * noise_with_scale(strike + INTEGRITY_SEED_OFFSET, scale),
        1,
    );

    let hold_noise = noise_with_scale(strike + HOLD_SEED_OFFSET, scale);
    let hold_pct = if classification == Classification::Normal {
        35.0 + 30.0 * hold_noise
    } else {
        50.0 + 45.0 * hold_noise
    };
    let hold_pct = round_to(hold_pct, 1);
    let break_pct = round_to(100.0 - hold_pct, 1);

    StrikeLevel {
        strike,
        gex_value,
        classification,
        role,
        call_pct,
        put_pct,
        mass: round_to(gex_value.abs() * 100.0, 2),
        effective: round_to(gex_value * integrity_pct / 100.0, 4),
        integrity_pct,
        hold_pct,
        break_pct,
        distance,
    }
}

#[cfg(test)]
mod tests;
