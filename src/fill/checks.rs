//! Validation vocabulary shared by every fill strategy.
//!
//! The `valid_*` predicates answer yes/no and drive the defaulting path of
//! the new-buffer calls; the `require_*` helpers turn the same predicates into
//! errors for calls that fill an existing buffer.

use crate::config::MAX_LENGTH;
use crate::fill::value::FillValue;
use crate::fill_error::FillError;

/// Inclusive `[min, max]` range a bound must fall in, compared as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundDomain {
    pub min: f64,
    pub max: f64,
}

impl BoundDomain {
    /// `[0, i32::MAX]`
    pub const NON_NEGATIVE_INT: Self = Self::new(0.0, i32::MAX as f64);
    /// `[i32::MIN, i32::MAX]`
    pub const INT: Self = Self::new(i32::MIN as f64, i32::MAX as f64);
    /// `[i32::MIN, 0]`
    pub const NON_POSITIVE_INT: Self = Self::new(i32::MIN as f64, 0.0);
    /// `[i64::MIN, i64::MAX]`
    pub const LONG: Self = Self::new(i64::MIN as f64, i64::MAX as f64);
    /// `[i64::MIN, 0]`
    pub const NON_POSITIVE_LONG: Self = Self::new(i64::MIN as f64, 0.0);
    /// `[i16::MIN, i16::MAX]`
    pub const SHORT: Self = Self::new(i16::MIN as f64, i16::MAX as f64);
    /// `[0, i16::MAX]`
    pub const NON_NEGATIVE_SHORT: Self = Self::new(0.0, i16::MAX as f64);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` iff `min <= value <= max`; NaN is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// `0 < n <= 32767`.
#[inline]
pub fn valid_length(n: i64) -> bool {
    n > 0 && n <= MAX_LENGTH as i64
}

/// `bound` is present and inside `domain`.
#[inline]
pub fn valid_bound<T: FillValue>(bound: Option<T>, domain: BoundDomain) -> bool {
    bound.is_some_and(|b| domain.contains(b.as_bound()))
}

/// `lower <= upper`.
#[inline]
pub fn lower_le_upper<T: PartialOrd>(lower: T, upper: T) -> bool {
    lower <= upper
}

/// Length of an existing buffer, or `LengthOutOfRange`.
pub fn require_length(len: usize) -> Result<usize, FillError> {
    let length = i64::try_from(len).unwrap_or(i64::MAX);
    if valid_length(length) {
        Ok(len)
    } else {
        Err(FillError::LengthOutOfRange { length })
    }
}

/// The bound itself, or `BoundOutOfRange` (absent bounds report NaN).
pub fn require_bound<T: FillValue>(bound: Option<T>, domain: BoundDomain) -> Result<T, FillError> {
    match bound {
        Some(b) if domain.contains(b.as_bound()) => Ok(b),
        _ => Err(FillError::BoundOutOfRange {
            bound: bound.map_or(f64::NAN, FillValue::as_bound),
            min: domain.min,
            max: domain.max,
        }),
    }
}

/// `Ok` when `lower <= upper`, otherwise `ReversedBound`.
pub fn require_ordered<T: FillValue>(lower: T, upper: T) -> Result<(), FillError> {
    if lower_le_upper(lower, upper) {
        Ok(())
    } else {
        Err(FillError::ReversedBound {
            lower: lower.as_bound(),
            upper: upper.as_bound(),
        })
    }
}
