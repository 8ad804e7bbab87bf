//! Uniform random numbers for the random-driven fills.
//!
//! [`RandomGenerator`] is implemented for every [`rand::Rng`], so a strategy
//! can own a `SmallRng::seed_from_u64(seed)` for reproducible runs or borrow
//! any other generator the caller already has.

use std::cmp::Ordering;

use rand::Rng;

use crate::config::ROUNDING_SCALE;

/// Inclusive-range uniform generator.
pub trait RandomGenerator {
    /// Uniform integer in `[lower, upper]`.
    fn uniform_int(&mut self, lower: i64, upper: i64) -> i64;

    /// Uniform double in `[lower, upper]`, rounded half-down to two decimals.
    fn uniform_double(&mut self, lower: f64, upper: f64) -> f64;
}

impl<R: Rng> RandomGenerator for R {
    fn uniform_int(&mut self, lower: i64, upper: i64) -> i64 {
        let (lo, hi) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        self.gen_range(lo..=hi)
    }

    fn uniform_double(&mut self, lower: f64, upper: f64) -> f64 {
        let (lo, hi) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        let raw = lo + self.r#gen::<f64>() * (hi - lo);
        // Rounding may step just outside the range; pull it back in.
        round_half_down(raw, ROUNDING_SCALE).max(lo).min(hi)
    }
}

/// Round `value` to `scale` decimal places, ties toward zero.
///
/// The tie is judged on the exact decimal expansion of `value`, not on the
/// rounded binary product `value * 10^scale`: `71.045` is stored as
/// `71.04500000000000170...`, which lies above the tie and rounds up.
///
/// ```
/// # use array_filler::random::round_half_down;
/// assert_eq!(round_half_down(0.125, 2), 0.12);
/// assert_eq!(round_half_down(0.126, 2), 0.13);
/// assert_eq!(round_half_down(71.045, 2), 71.05);
/// ```
pub fn round_half_down(value: f64, scale: i32) -> f64 {
    let magnitude = value.abs();
    // At or above 2^52 every finite f64 is an integer.
    if !value.is_finite() || magnitude >= TWO_POW_52 {
        return value;
    }
    let digits = match u32::try_from(scale) {
        Ok(d) if d <= MAX_EXACT_SCALE => d,
        _ => return round_half_down_approx(value, scale),
    };
    let factor = 10f64.powi(scale);
    let mut k = (magnitude * factor).floor() as u128;
    // The float product may be off by one ulp; settle k so that
    // k <= |value| * 10^scale < k + 1 holds exactly.
    if cmp_doubled(magnitude, digits, 2 * k) == Ordering::Less {
        k -= 1;
    } else if cmp_doubled(magnitude, digits, 2 * k + 2) != Ordering::Less {
        k += 1;
    }
    if cmp_doubled(magnitude, digits, 2 * k + 1) == Ordering::Greater {
        k += 1;
    }
    (k as f64 / factor).copysign(value)
}

const TWO_POW_52: f64 = 4_503_599_627_370_496.0;

/// Largest scale for which `2 * mantissa * 10^scale` fits in a `u128`.
const MAX_EXACT_SCALE: u32 = 18;

/// Exact ordering of `magnitude * 2 * 10^digits` against the integer `q`.
///
/// `magnitude` must be finite, non-negative and below 2^52.
fn cmp_doubled(magnitude: f64, digits: u32, q: u128) -> Ordering {
    let bits = magnitude.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = u128::from(bits & ((1u64 << 52) - 1));
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u128 << 52), biased - 1075)
    };
    // magnitude = mantissa * 2^exp with exp < 0 below 2^52.
    let lhs = mantissa * 2 * 10u128.pow(digits);
    if q == 0 {
        return lhs.cmp(&0);
    }
    let shift = exp.unsigned_abs();
    if shift > q.leading_zeros() {
        // q * 2^shift exceeds u128::MAX, and lhs never does.
        return Ordering::Less;
    }
    lhs.cmp(&(q << shift))
}

fn round_half_down_approx(value: f64, scale: i32) -> f64 {
    let factor = 10f64.powi(scale);
    let scaled = value.abs() * factor;
    let floor = scaled.floor();
    let rounded = if scaled - floor > 0.5 { floor + 1.0 } else { floor };
    (rounded / factor).copysign(value)
}
