//! FillError: Unified error type for array-filler public APIs
//!
//! Every fallible container and fill operation reports through this enum, so
//! callers can tell a rejected call (bad length, bad bounds, bad index) apart
//! from a failing collaborator (an exhausted or unreadable value source).

use thiserror::Error;

/// Unified error type for container and fill operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FillError {
    /// Requested length outside `(0, 32767]` on a call that cannot default it.
    #[error("Length {length} is out of range (valid: 1 - 32767)")]
    LengthOutOfRange { length: i64 },
    /// A bound is absent or lies outside the strategy's valid domain.
    ///
    /// An absent bound is reported with `bound = NaN`.
    #[error("Bound value {bound} is out of range [{min}, {max}]")]
    BoundOutOfRange { bound: f64, min: f64, max: f64 },
    /// The lower bound is greater than the upper bound.
    #[error("Lower bound {lower} is greater than upper bound {upper}")]
    ReversedBound { lower: f64, upper: f64 },
    /// Write/delete at an index outside `[0, len)`.
    #[error("Index {index} out of range [0, {}]", *len as i64 - 1)]
    IndexOutOfRange { index: usize, len: usize },
    /// The value source has no more values to hand out.
    #[error("Value source exhausted")]
    SourceExhausted,
    /// A token from the value source is not a valid `kind`.
    #[error("Cannot read `{token}` as {kind}")]
    Parse { token: String, kind: &'static str },
    /// Underlying reader failed.
    #[error("Value source I/O error: {0}")]
    Io(String),
    /// A `FillConfig` failed validation.
    #[error("Invalid fill configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for FillError {
    fn from(e: std::io::Error) -> Self {
        FillError::Io(e.to_string())
    }
}
