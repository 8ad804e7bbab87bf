//! Library-wide constants and the per-strategy [`FillConfig`].

use serde::{Deserialize, Serialize};

use crate::fill::checks;
use crate::fill_error::FillError;

/// Length used when a requested length is absent or out of range.
pub const DEFAULT_LENGTH: usize = 10;

/// Largest length a fill or container constructor accepts (`i16::MAX`).
pub const MAX_LENGTH: usize = i16::MAX as usize;

/// Ceiling on the length [`Container::set`](crate::data::Container::set) grows to.
pub const MAX_SLOTS: usize = i32::MAX as usize;

/// Default bound substituted for an invalid non-negative bound.
pub const DEFAULT_POSITIVE_BOUND: i32 = 100;

/// Default bound substituted for an invalid non-positive bound.
pub const DEFAULT_NEGATIVE_BOUND: i32 = -100;

/// Lower end of the unbounded random fill.
pub const DEFAULT_RANDOM_LOWER: i32 = -128;

/// Upper end of the unbounded random fill.
pub const DEFAULT_RANDOM_UPPER: i32 = 127;

/// Step of the fractional descending fill.
pub const FRACTION_STEP: f64 = 0.1;

/// Decimal places kept by the random double generator.
pub const ROUNDING_SCALE: i32 = 2;

/// Knobs shared by every fill strategy.
///
/// ```
/// # use array_filler::config::FillConfig;
/// let cfg: FillConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(cfg.default_length, 10);
/// assert_eq!(cfg.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Length of the buffer created when a requested length is invalid.
    pub default_length: usize,
    /// Seed for strategies that own a random generator.
    pub seed: u64,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            seed: 42,
        }
    }
}

impl FillConfig {
    /// Rejects a default length outside `(0, 32767]`.
    pub fn validate(&self) -> Result<(), FillError> {
        if !checks::valid_length(self.default_length as i64) {
            return Err(FillError::InvalidConfig(format!(
                "default_length {} outside (0, {MAX_LENGTH}]",
                self.default_length
            )));
        }
        Ok(())
    }
}
