//! Ascending sequential fill: `start, start + 1, start + 2, ...`.

use std::marker::PhantomData;

use crate::config::{DEFAULT_POSITIVE_BOUND, FillConfig};
use crate::fill::checks::BoundDomain;
use crate::fill::value::FillValue;
use crate::fill::Fill;
use crate::fill_error::FillError;

/// Counts up by one from zero (or from `lower`).
///
/// Bounded forms stop once the running value passes the upper bound and
/// write the sentinel into every remaining slot.
///
/// ```
/// # use array_filler::fill::{Ascending, Fill};
/// let mut asc = Ascending::<i32>::new();
/// assert_eq!(asc.fill_new_range(6, Some(3), Some(5)).unwrap(), vec![3, 4, 5, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ascending<T> {
    config: FillConfig,
    _value: PhantomData<fn() -> T>,
}

impl<T: FillValue> Ascending<T> {
    pub fn new() -> Self {
        Self {
            config: FillConfig::default(),
            _value: PhantomData,
        }
    }

    pub fn with_config(mut self, config: FillConfig) -> Result<Self, FillError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }
}

/// Slot `i` gets `start + step * i` while that stays `<= upper`; the
/// sentinel afterwards.
pub(crate) fn ascend<T: FillValue>(dst: &mut [T], start: T, step: T, upper: Option<T>) {
    for (i, slot) in dst.iter_mut().enumerate() {
        *slot = match start.step_up(step, i) {
            Some(v) if upper.is_none_or(|hi| v <= hi) => v,
            _ => T::sentinel(),
        };
    }
}

impl<T: FillValue> Fill for Ascending<T> {
    type Item = T;
    type Bound = T;

    fn config(&self) -> &FillConfig {
        &self.config
    }

    fn bound_domain(&self) -> BoundDomain {
        BoundDomain::NON_NEGATIVE_INT
    }

    fn range_domain(&self) -> BoundDomain {
        BoundDomain::INT
    }

    fn default_bound(&self) -> T {
        T::from_bound(DEFAULT_POSITIVE_BOUND)
    }

    fn default_range(&self) -> (T, T) {
        (T::zero(), T::from_bound(DEFAULT_POSITIVE_BOUND))
    }

    fn generate(&mut self, dst: &mut [T]) -> Result<(), FillError> {
        ascend(dst, T::zero(), T::one(), None);
        Ok(())
    }

    fn generate_to_bound(&mut self, dst: &mut [T], bound: T) -> Result<(), FillError> {
        ascend(dst, T::zero(), T::one(), Some(bound));
        Ok(())
    }

    fn generate_range(&mut self, dst: &mut [T], lower: T, upper: T) -> Result<(), FillError> {
        ascend(dst, lower, T::one(), Some(upper));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Container;

    #[test]
    fn unbounded_counts_from_zero() {
        let mut asc = Ascending::<i64>::new();
        assert_eq!(asc.fill_new(5).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn doubles_step_by_whole_units() {
        let mut asc = Ascending::<f64>::new();
        assert_eq!(
            asc.fill_new_range(4, Some(2.5), Some(10.0)).unwrap(),
            vec![2.5, 3.5, 4.5, 5.5]
        );
    }

    #[test]
    fn bound_stops_early_with_sentinel() {
        let mut asc = Ascending::<i32>::new();
        let mut buf = [9; 6];
        asc.fill_to_bound(&mut buf, Some(2)).unwrap();
        assert_eq!(buf, [0, 1, 2, 0, 0, 0]);
    }

    #[test]
    fn range_at_type_ceiling_does_not_overflow() {
        let mut asc = Ascending::<i32>::new();
        let mut buf = [1; 4];
        asc.fill_range(&mut buf, Some(i32::MAX - 1), Some(i32::MAX))
            .unwrap();
        assert_eq!(buf, [i32::MAX - 1, i32::MAX, 0, 0]);
    }

    #[test]
    fn existing_buffer_rejects_bad_input() {
        let mut asc = Ascending::<i32>::new();
        let mut empty: [i32; 0] = [];
        assert_eq!(
            asc.fill(&mut empty),
            Err(FillError::LengthOutOfRange { length: 0 })
        );
        let mut buf = [0; 3];
        assert!(matches!(
            asc.fill_to_bound(&mut buf, Some(-1)),
            Err(FillError::BoundOutOfRange { .. })
        ));
        assert!(matches!(
            asc.fill_to_bound(&mut buf, None),
            Err(FillError::BoundOutOfRange { .. })
        ));
        assert_eq!(
            asc.fill_range(&mut buf, Some(5), Some(1)),
            Err(FillError::ReversedBound {
                lower: 5.0,
                upper: 1.0
            })
        );
        // Nothing was written.
        assert_eq!(buf, [0, 0, 0]);
    }

    #[test]
    fn new_buffer_defaults_instead_of_failing() {
        let mut asc = Ascending::<i32>::new();
        assert_eq!(asc.fill_new(-3).unwrap().len(), 10);

        let bounded = asc.fill_new_to_bound(3, Some(-7)).unwrap();
        assert_eq!(bounded, vec![0, 1, 2]);

        let ranged = asc.fill_new_range(4, Some(9), Some(1)).unwrap();
        assert_eq!(ranged, vec![0, 1, 2, 3]);

        let bound_long = Ascending::<i64>::new()
            .fill_new_to_bound(3, Some(1 << 40))
            .unwrap();
        assert_eq!(bound_long, vec![0, 1, 2]);
    }

    #[test]
    fn configured_default_length() {
        let cfg = FillConfig {
            default_length: 3,
            ..Default::default()
        };
        let mut asc = Ascending::<i32>::new().with_config(cfg).unwrap();
        assert_eq!(asc.fill_new(0).unwrap(), vec![0, 1, 2]);
        assert!(
            Ascending::<i32>::new()
                .with_config(FillConfig {
                    default_length: 0,
                    ..Default::default()
                })
                .is_err()
        );
    }

    #[test]
    fn container_forms() {
        let mut asc = Ascending::<i32>::new();
        let mut c = Container::with_length(4);
        asc.fill_container_to_bound(&mut c, Some(1)).unwrap();
        assert_eq!(c.as_slice(), &[Some(0), Some(1), Some(0), Some(0)]);
        assert_eq!(c.cursor(), 4);

        let made = asc.fill_new_container(3).unwrap();
        assert_eq!(made.values().copied().collect::<Vec<_>>(), vec![0, 1, 2]);

        let mut empty = Container::<i32>::from_buffer(Some(Vec::new()));
        assert!(asc.fill_container(&mut empty).is_err());
    }
}
