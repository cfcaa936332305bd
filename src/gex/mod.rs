//! Synthetic gamma exposure (GEX) level derivation.
//!
//! Given a reference price and up to five named anchors (gamma flip, call
//! wall, put wall, high-volume level, max pain) this module lays out a fixed
//! ladder of strikes around the reference price, assigns each strike a signed
//! synthetic magnitude and classifies it as a wall, zero-gamma point, magnet
//! or normal strike.
//!
//! ## Synthetic data
//!
//! None of the values produced here come from open interest. Magnitudes and
//! the derived statistics are shaped by a deterministic noise source seeded by
//! the strike, so a chart looks populated when a real options chain is not
//! available. Every outward representation carries the [`SYNTHETIC_DISCLAIMER`].
//!
//! ## Pipeline
//!
//! ```text
//! reference price ──► resolve_reference_price ──► generate_levels ──► Vec<StrikeLevel>
//!                                                   │        │
//!                                                 noise   classify
//! ```

mod classifier;
mod error;
mod generator;
mod noise;
mod profile;
mod summary;
mod types;

pub use classifier::{classify, is_near};
pub use error::GexError;
pub use generator::{generate_levels, resolve_reference_price, MAX_STRIKES};
pub use noise::{noise, noise_with_scale, NOISE_SCALE};
pub use profile::{GexProfile, SYNTHETIC_DISCLAIMER};
pub use summary::{summarize, GammaRegime, GexSummary, WallLevel};
pub use types::{Classification, GeneratorParams, NamedLevels, Role, StrikeLevel};
