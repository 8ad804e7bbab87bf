//! Read-driven fill: every slot comes from a [`ValueSource`].

use std::marker::PhantomData;

use crate::config::{DEFAULT_NEGATIVE_BOUND, DEFAULT_POSITIVE_BOUND, FillConfig};
use crate::fill::checks::BoundDomain;
use crate::fill::value::FillValue;
use crate::fill::Fill;
use crate::fill_error::FillError;
use crate::source::ValueSource;

/// Fills slots with values read from a source, one read per slot.
///
/// A read outside the active `[lower, upper]` window is replaced by the
/// sentinel; it is never re-read. The single-bound form uses `[0, bound]`.
///
/// ```
/// # use array_filler::fill::{Fill, ReadNumbers};
/// # use array_filler::source::ScriptedSource;
/// let mut read = ReadNumbers::<_, i32>::new(ScriptedSource::new([5, 200, 40]));
/// assert_eq!(read.fill_new_to_bound(3, Some(100)).unwrap(), vec![5, 0, 40]);
/// ```
#[derive(Debug, Clone)]
pub struct ReadNumbers<S, T> {
    source: S,
    config: FillConfig,
    _value: PhantomData<fn() -> T>,
}

impl<S: ValueSource, T: FillValue> ReadNumbers<S, T> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: FillConfig::default(),
            _value: PhantomData,
        }
    }

    pub fn with_config(mut self, config: FillConfig) -> Result<Self, FillError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// One read, replaced by the sentinel if it falls outside `window`.
    pub(crate) fn read_within(&mut self, window: Option<(T, T)>) -> Result<T, FillError> {
        let value = T::read_from(&mut self.source)?;
        match window {
            Some((lo, hi)) if !(lo <= value && value <= hi) => {
                log::warn!("read {value} outside [{lo}, {hi}]; replaced with {}", T::sentinel());
                Ok(T::sentinel())
            }
            _ => Ok(value),
        }
    }

    fn read_into(&mut self, dst: &mut [T], window: Option<(T, T)>) -> Result<(), FillError> {
        let values = (0..dst.len())
            .map(|_| self.read_within(window))
            .collect::<Result<Vec<_>, _>>()?;
        dst.copy_from_slice(&values);
        Ok(())
    }
}

impl<S: ValueSource, T: FillValue> Fill for ReadNumbers<S, T> {
    type Item = T;
    type Bound = T;

    fn config(&self) -> &FillConfig {
        &self.config
    }

    fn bound_domain(&self) -> BoundDomain {
        BoundDomain::NON_NEGATIVE_SHORT
    }

    fn range_domain(&self) -> BoundDomain {
        BoundDomain::SHORT
    }

    fn default_bound(&self) -> T {
        T::from_bound(DEFAULT_POSITIVE_BOUND)
    }

    fn default_range(&self) -> (T, T) {
        (
            T::from_bound(DEFAULT_NEGATIVE_BOUND),
            T::from_bound(DEFAULT_POSITIVE_BOUND),
        )
    }

    fn generate(&mut self, dst: &mut [T]) -> Result<(), FillError> {
        self.read_into(dst, None)
    }

    fn generate_to_bound(&mut self, dst: &mut [T], bound: T) -> Result<(), FillError> {
        self.read_into(dst, Some((T::zero(), bound)))
    }

    fn generate_range(&mut self, dst: &mut [T], lower: T, upper: T) -> Result<(), FillError> {
        self.read_into(dst, Some((lower, upper)))
    }
}
