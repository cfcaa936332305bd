//! Deterministic pseudo-random values keyed by strike.
//!
//! The same seed always yields the same value. This is not a statistical RNG;
//! it only needs to look scattered across strikes spaced by a fixed interval.

/// Default scale constant applied to the seed before taking the sine.
pub const NOISE_SCALE: f64 = 0.01;

/// Amplification applied to the sine before the fractional part is taken.
const AMPLITUDE: f64 = 10_000.0;

/// Returns a value in `[0, 1)` derived from `seed` with the default scale.
#[must_use]
pub fn noise(seed: f64) -> f64 {
    noise_with_scale(seed, NOISE_SCALE)
}

/// Returns the fractional part of `sin(seed * scale) * 10000`.
///
/// The fractional part is `x - floor(x)`, so negative sines still map into
/// `[0, 1)`. Non-finite intermediate values collapse to `0.0`.
#[must_use]
pub fn noise_with_scale(seed: f64, scale: f64) -> f64 {
    let x = (seed * scale).sin() * AMPLITUDE;
    if !x.is_finite() {
        return 0.0;
    }
    let frac = x - x.floor();
    // x - floor(x) can round up to exactly 1.0 for tiny negative x
    if frac >= 1.0 { 0.0 } else { frac }
}
