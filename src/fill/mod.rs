//! Fill engine: strategies that populate buffers and containers.
//!
//! Every strategy implements [`Fill`] by supplying three generation routines
//! (no bound, single bound, lower/upper range) plus its bound domains and
//! defaults. The trait turns those into the public call shapes, each with a
//! fixed policy on invalid input:
//!
//! | Call shape | Invalid length | Invalid or reversed bounds |
//! |---|---|---|
//! | `fill*` / `fill_container*` (existing destination) | `LengthOutOfRange` | `BoundOutOfRange` / `ReversedBound` |
//! | `fill_new*` / `fill_new_container*` (fresh destination) | default length | strategy defaults |
//!
//! Validation always completes before the first slot is written.

pub mod ascending;
pub mod checks;
pub mod descending;
pub mod points;
pub mod random;
pub mod read;
pub mod value;

pub use ascending::Ascending;
pub use checks::BoundDomain;
pub use descending::Descending;
pub use points::{AscendingPoints, DescendingPoints, GeneratedPoints, RandomPoints, ReadPoints};
pub use random::RandomNumbers;
pub use read::ReadNumbers;
pub use value::FillValue;

use crate::config::FillConfig;
use crate::data::container::Container;
use crate::fill_error::FillError;

/// A fill strategy.
///
/// Implementors provide the `generate*` routines, which may assume their
/// arguments have already been validated; callers use the provided methods.
pub trait Fill {
    /// Element written into each slot.
    type Item: Clone + Default;
    /// Scalar type of the bounds.
    type Bound: FillValue;

    fn config(&self) -> &FillConfig;

    /// Domain of the single-bound form.
    fn bound_domain(&self) -> BoundDomain;

    /// Domain of each end of the lower/upper form.
    fn range_domain(&self) -> BoundDomain;

    /// Substitute for an invalid single bound on the new-buffer path.
    fn default_bound(&self) -> Self::Bound;

    /// Substitute for an invalid or reversed range on the new-buffer path.
    fn default_range(&self) -> (Self::Bound, Self::Bound);

    fn generate(&mut self, dst: &mut [Self::Item]) -> Result<(), FillError>;

    fn generate_to_bound(
        &mut self,
        dst: &mut [Self::Item],
        bound: Self::Bound,
    ) -> Result<(), FillError>;

    fn generate_range(
        &mut self,
        dst: &mut [Self::Item],
        lower: Self::Bound,
        upper: Self::Bound,
    ) -> Result<(), FillError>;

    /// Fill every slot of `dst`.
    ///
    /// # Errors
    /// `LengthOutOfRange` if `dst.len()` is outside `(0, 32767]`.
    fn fill(&mut self, dst: &mut [Self::Item]) -> Result<(), FillError> {
        checks::require_length(dst.len())?;
        self.generate(dst)
    }

    /// Fill every slot of `dst`, limited by `bound`.
    ///
    /// # Errors
    /// `LengthOutOfRange`, or `BoundOutOfRange` if `bound` is absent or
    /// outside [`Fill::bound_domain`].
    fn fill_to_bound(
        &mut self,
        dst: &mut [Self::Item],
        bound: Option<Self::Bound>,
    ) -> Result<(), FillError> {
        checks::require_length(dst.len())?;
        let bound = checks::require_bound(bound, self.bound_domain())?;
        self.generate_to_bound(dst, bound)
    }

    /// Fill every slot of `dst` within `[lower, upper]`.
    ///
    /// # Errors
    /// `LengthOutOfRange`, `BoundOutOfRange`, or `ReversedBound` if
    /// `lower > upper`.
    fn fill_range(
        &mut self,
        dst: &mut [Self::Item],
        lower: Option<Self::Bound>,
        upper: Option<Self::Bound>,
    ) -> Result<(), FillError> {
        checks::require_length(dst.len())?;
        let domain = self.range_domain();
        let lower = checks::require_bound(lower, domain)?;
        let upper = checks::require_bound(upper, domain)?;
        checks::require_ordered(lower, upper)?;
        self.generate_range(dst, lower, upper)
    }

    /// Refill every slot of `container`; same errors as [`Fill::fill`].
    fn fill_container(&mut self, container: &mut Container<Self::Item>) -> Result<(), FillError> {
        let mut buf = vec![Self::Item::default(); container.len()];
        self.fill(&mut buf)?;
        container.set_values(buf);
        Ok(())
    }

    /// Refill every slot of `container`; same errors as [`Fill::fill_to_bound`].
    fn fill_container_to_bound(
        &mut self,
        container: &mut Container<Self::Item>,
        bound: Option<Self::Bound>,
    ) -> Result<(), FillError> {
        let mut buf = vec![Self::Item::default(); container.len()];
        self.fill_to_bound(&mut buf, bound)?;
        container.set_values(buf);
        Ok(())
    }

    /// Refill every slot of `container`; same errors as [`Fill::fill_range`].
    fn fill_container_range(
        &mut self,
        container: &mut Container<Self::Item>,
        lower: Option<Self::Bound>,
        upper: Option<Self::Bound>,
    ) -> Result<(), FillError> {
        let mut buf = vec![Self::Item::default(); container.len()];
        self.fill_range(&mut buf, lower, upper)?;
        container.set_values(buf);
        Ok(())
    }

    /// A new buffer of `length` slots; an invalid length uses the configured
    /// default length.
    ///
    /// Only collaborator failures (e.g. an exhausted value source) error.
    fn fill_new(&mut self, length: i64) -> Result<Vec<Self::Item>, FillError> {
        let mut buf: Vec<Self::Item> = new_buffer(length, self.config());
        self.generate(&mut buf)?;
        Ok(buf)
    }

    /// As [`Fill::fill_new`], limited by `bound`; an invalid bound uses
    /// [`Fill::default_bound`].
    fn fill_new_to_bound(
        &mut self,
        length: i64,
        bound: Option<Self::Bound>,
    ) -> Result<Vec<Self::Item>, FillError> {
        let mut buf: Vec<Self::Item> = new_buffer(length, self.config());
        let bound = match bound {
            Some(b) if checks::valid_bound(Some(b), self.bound_domain()) => b,
            _ => {
                let fallback = self.default_bound();
                log::debug!("bound {bound:?} invalid; using default {fallback:?}");
                fallback
            }
        };
        self.generate_to_bound(&mut buf, bound)?;
        Ok(buf)
    }

    /// As [`Fill::fill_new`], within `[lower, upper]`; an invalid or reversed
    /// range uses [`Fill::default_range`].
    fn fill_new_range(
        &mut self,
        length: i64,
        lower: Option<Self::Bound>,
        upper: Option<Self::Bound>,
    ) -> Result<Vec<Self::Item>, FillError> {
        let mut buf: Vec<Self::Item> = new_buffer(length, self.config());
        let domain = self.range_domain();
        let (lower, upper) = match (lower, upper) {
            (Some(lo), Some(hi))
                if checks::valid_bound(Some(lo), domain)
                    && checks::valid_bound(Some(hi), domain)
                    && checks::lower_le_upper(lo, hi) =>
            {
                (lo, hi)
            }
            _ => {
                let fallback = self.default_range();
                log::debug!("range ({lower:?}, {upper:?}) invalid; using default {fallback:?}");
                fallback
            }
        };
        self.generate_range(&mut buf, lower, upper)?;
        Ok(buf)
    }

    /// [`Fill::fill_new`] wrapped in a container.
    fn fill_new_container(&mut self, length: i64) -> Result<Container<Self::Item>, FillError> {
        self.fill_new(length).map(Container::from)
    }

    /// [`Fill::fill_new_to_bound`] wrapped in a container.
    fn fill_new_container_to_bound(
        &mut self,
        length: i64,
        bound: Option<Self::Bound>,
    ) -> Result<Container<Self::Item>, FillError> {
        self.fill_new_to_bound(length, bound).map(Container::from)
    }

    /// [`Fill::fill_new_range`] wrapped in a container.
    fn fill_new_container_range(
        &mut self,
        length: i64,
        lower: Option<Self::Bound>,
        upper: Option<Self::Bound>,
    ) -> Result<Container<Self::Item>, FillError> {
        self.fill_new_range(length, lower, upper)
            .map(Container::from)
    }
}

fn new_buffer<I: Clone + Default>(length: i64, config: &FillConfig) -> Vec<I> {
    let len = if checks::valid_length(length) {
        length as usize
    } else {
        log::debug!(
            "length {length} out of range; using default length {}",
            config.default_length
        );
        config.default_length
    };
    vec![I::default(); len]
}
