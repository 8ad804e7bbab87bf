//! Descending sequential fill, integer-stepped or fractional-stepped.

use crate::config::{DEFAULT_NEGATIVE_BOUND, FRACTION_STEP, FillConfig};
use crate::fill::checks::BoundDomain;
use crate::fill::value::FillValue;
use crate::fill::Fill;
use crate::fill_error::FillError;

/// Counts down from zero (or from `upper`) by a fixed step.
///
/// Bounded forms stop once the running value drops below the lower bound and
/// write the sentinel into the remaining slots. The single-bound form is the
/// range form called with `(bound, 0)`, so both always agree.
///
/// ```
/// # use array_filler::fill::{Descending, Fill};
/// let mut desc = Descending::<i32>::new();
/// assert_eq!(desc.fill_new_to_bound(5, Some(-2)).unwrap(), vec![0, -1, -2, 0, 0]);
///
/// let mut frac = Descending::fractional();
/// assert_eq!(frac.fill_new_range(3, Some(-1.0), Some(0.0)).unwrap(), vec![0.0, -0.1, -0.2]);
/// ```
#[derive(Debug, Clone)]
pub struct Descending<T> {
    config: FillConfig,
    step: T,
    bound_domain: BoundDomain,
    range_domain: BoundDomain,
}

impl<T: FillValue> Descending<T> {
    /// Steps by one; bounds in the `i32` domains.
    pub fn new() -> Self {
        Self {
            config: FillConfig::default(),
            step: T::one(),
            bound_domain: BoundDomain::NON_POSITIVE_INT,
            range_domain: BoundDomain::INT,
        }
    }

    pub fn with_config(mut self, config: FillConfig) -> Result<Self, FillError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn step(&self) -> T {
        self.step
    }
}

impl Descending<f64> {
    /// Steps by `0.1`; bounds in the `i64` domains.
    pub fn fractional() -> Self {
        Self {
            config: FillConfig::default(),
            step: FRACTION_STEP,
            bound_domain: BoundDomain::NON_POSITIVE_LONG,
            range_domain: BoundDomain::LONG,
        }
    }
}

impl<T: FillValue> Default for Descending<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn descend<T: FillValue>(dst: &mut [T], start: T, step: T, lower: Option<T>) {
    for (i, slot) in dst.iter_mut().enumerate() {
        *slot = match start.step_down(step, i) {
            Some(v) if lower.is_none_or(|lo| v >= lo) => v,
            _ => T::sentinel(),
        };
    }
}

impl<T: FillValue> Fill for Descending<T> {
    type Item = T;
    type Bound = T;

    fn config(&self) -> &FillConfig {
        &self.config
    }

    fn bound_domain(&self) -> BoundDomain {
        self.bound_domain
    }

    fn range_domain(&self) -> BoundDomain {
        self.range_domain
    }

    fn default_bound(&self) -> T {
        T::from_bound(DEFAULT_NEGATIVE_BOUND)
    }

    fn default_range(&self) -> (T, T) {
        (T::from_bound(DEFAULT_NEGATIVE_BOUND), T::zero())
    }

    fn generate(&mut self, dst: &mut [T]) -> Result<(), FillError> {
        descend(dst, T::zero(), self.step, None);
        Ok(())
    }

    fn generate_to_bound(&mut self, dst: &mut [T], bound: T) -> Result<(), FillError> {
        self.generate_range(dst, bound, T::zero())
    }

    fn generate_range(&mut self, dst: &mut [T], lower: T, upper: T) -> Result<(), FillError> {
        descend(dst, upper, self.step, Some(lower));
        Ok(())
    }
}
