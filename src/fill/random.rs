//! Random-driven fill over a [`RandomGenerator`].

use std::marker::PhantomData;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{DEFAULT_RANDOM_LOWER, DEFAULT_RANDOM_UPPER, FillConfig};
use crate::fill::checks::BoundDomain;
use crate::fill::value::FillValue;
use crate::fill::Fill;
use crate::fill_error::FillError;
use crate::random::RandomGenerator;

/// Fills every slot with an independent uniform draw.
///
/// No bound draws from `[-128, 127]`, a single bound from `[0, bound]`, a
/// range from `[lower, upper]`. Doubles carry two decimals.
///
/// ```
/// # use array_filler::config::FillConfig;
/// # use array_filler::fill::{Fill, RandomNumbers};
/// let mut rnd = RandomNumbers::<_, i32>::seeded(FillConfig::default()).unwrap();
/// let v = rnd.fill_new_range(8, Some(-3), Some(3)).unwrap();
/// assert!(v.iter().all(|x| (-3..=3).contains(x)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomNumbers<R, T> {
    rng: R,
    config: FillConfig,
    _value: PhantomData<fn() -> T>,
}

impl<R: RandomGenerator, T: FillValue> RandomNumbers<R, T> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: FillConfig::default(),
            _value: PhantomData,
        }
    }

    pub fn with_config(mut self, config: FillConfig) -> Result<Self, FillError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    fn draw_into(&mut self, dst: &mut [T], lower: T, upper: T) {
        for slot in dst.iter_mut() {
            *slot = T::sample(&mut self.rng, lower, upper);
        }
    }
}

impl<T: FillValue> RandomNumbers<SmallRng, T> {
    /// Owns a `SmallRng` seeded from `config.seed`.
    pub fn seeded(config: FillConfig) -> Result<Self, FillError> {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self::new(rng).with_config(config)
    }
}

impl<R: RandomGenerator, T: FillValue> Fill for RandomNumbers<R, T> {
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
        T::from_bound(DEFAULT_RANDOM_UPPER)
    }

    fn default_range(&self) -> (T, T) {
        (
            T::from_bound(DEFAULT_RANDOM_LOWER),
            T::from_bound(DEFAULT_RANDOM_UPPER),
        )
    }

    fn generate(&mut self, dst: &mut [T]) -> Result<(), FillError> {
        let (lower, upper) = self.default_range();
        self.draw_into(dst, lower, upper);
        Ok(())
    }

    fn generate_to_bound(&mut self, dst: &mut [T], bound: T) -> Result<(), FillError> {
        self.draw_into(dst, T::zero(), bound);
        Ok(())
    }

    fn generate_range(&mut self, dst: &mut [T], lower: T, upper: T) -> Result<(), FillError> {
        self.draw_into(dst, lower, upper);
        Ok(())
    }
}
