//! The closed set of numeric types the fill strategies run over.
//!
//! One generic algorithm per strategy is instantiated for `i32`, `i64` and
//! `f64`. Everything type-specific (overflow-checked stepping, which source
//! read to call, which generator call to make) lives here.

use std::fmt;

use num_traits::{Num, NumCast};

use crate::fill_error::FillError;
use crate::random::RandomGenerator;
use crate::source::ValueSource;

/// A number a fill strategy can write.
pub trait FillValue: Num + NumCast + Copy + PartialOrd + Default + fmt::Debug + fmt::Display {
    /// Value written into slots a strategy could not reach.
    #[inline]
    fn sentinel() -> Self {
        Self::zero()
    }

    /// The value as `f64` for domain checks; NaN if it has no `f64` form.
    #[inline]
    fn as_bound(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Exact conversion of a library default.
    fn from_bound(v: i32) -> Self;

    /// `self + step * count`, or `None` on overflow.
    fn step_up(self, step: Self, count: usize) -> Option<Self>;

    /// `self - step * count`, or `None` on overflow.
    fn step_down(self, step: Self, count: usize) -> Option<Self>;

    /// Pull one value of this type from `source`.
    fn read_from<S: ValueSource + ?Sized>(source: &mut S) -> Result<Self, FillError>;

    /// One uniform draw in `[lower, upper]`.
    fn sample<R: RandomGenerator + ?Sized>(rng: &mut R, lower: Self, upper: Self) -> Self;
}

macro_rules! impl_fill_int {
    ($t:ty, $read:ident) => {
        impl FillValue for $t {
            #[inline]
            fn from_bound(v: i32) -> Self {
                <$t as From<i32>>::from(v)
            }

            fn step_up(self, step: Self, count: usize) -> Option<Self> {
                let count = <$t>::try_from(count).ok()?;
                self.checked_add(step.checked_mul(count)?)
            }

            fn step_down(self, step: Self, count: usize) -> Option<Self> {
                let count = <$t>::try_from(count).ok()?;
                self.checked_sub(step.checked_mul(count)?)
            }

            fn read_from<S: ValueSource + ?Sized>(source: &mut S) -> Result<Self, FillError> {
                source.$read()
            }

            fn sample<R: RandomGenerator + ?Sized>(rng: &mut R, lower: Self, upper: Self) -> Self {
                let v = rng.uniform_int(
                    <i64 as From<$t>>::from(lower),
                    <i64 as From<$t>>::from(upper),
                );
                <$t>::try_from(v).unwrap_or(lower)
            }
        }
    };
}

impl_fill_int!(i32, read_int);
impl_fill_int!(i64, read_long);

impl FillValue for f64 {
    #[inline]
    fn from_bound(v: i32) -> Self {
        <f64 as From<i32>>::from(v)
    }

    fn step_up(self, step: Self, count: usize) -> Option<Self> {
        Some(self + step * count as f64)
    }

    fn step_down(self, step: Self, count: usize) -> Option<Self> {
        Some(self - step * count as f64)
    }

    fn read_from<S: ValueSource + ?Sized>(source: &mut S) -> Result<Self, FillError> {
        source.read_double()
    }

    fn sample<R: RandomGenerator + ?Sized>(rng: &mut R, lower: Self, upper: Self) -> Self {
        rng.uniform_double(lower, upper)
    }
}
