//! Point-coordinate fills.
//!
//! Points reuse the numeric strategies unchanged: [`GeneratedPoints`] runs a
//! numeric strategy once per axis and zips the columns, while [`ReadPoints`]
//! reads each point's coordinates from a source in axis order. Validation,
//! defaults and bound domains are those of the wrapped numeric strategy.

use std::marker::PhantomData;

use crate::config::FillConfig;
use crate::fill::ascending::Ascending;
use crate::fill::checks::BoundDomain;
use crate::fill::descending::Descending;
use crate::fill::random::RandomNumbers;
use crate::fill::read::ReadNumbers;
use crate::fill::value::FillValue;
use crate::fill::Fill;
use crate::fill_error::FillError;
use crate::geometry::point::{CoordinatePoint, Point};
use crate::source::ValueSource;

pub type AscendingPoints<T, P = Point<T>> = GeneratedPoints<Ascending<T>, P>;
pub type DescendingPoints<T, P = Point<T>> = GeneratedPoints<Descending<T>, P>;
pub type RandomPoints<R, T, P = Point<T>> = GeneratedPoints<RandomNumbers<R, T>, P>;

/// Each axis is an independent run of the wrapped numeric strategy.
///
/// ```
/// # use array_filler::fill::{AscendingPoints, Ascending, Fill};
/// # use array_filler::geometry::Point;
/// let mut pts = AscendingPoints::<i32>::new(Ascending::new());
/// let got = pts.fill_new_to_bound(3, Some(1)).unwrap();
/// assert_eq!(got, vec![Point::new(0, 0), Point::new(1, 1), Point::new(0, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratedPoints<G, P> {
    inner: G,
    _point: PhantomData<fn() -> P>,
}

impl<G: Fill, P> GeneratedPoints<G, P> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            _point: PhantomData,
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G, P> GeneratedPoints<G, P>
where
    G: Fill,
    G::Item: Copy,
    P: CoordinatePoint<G::Item>,
{
    fn by_columns(
        &mut self,
        dst: &mut [P],
        mut column: impl FnMut(&mut G, &mut [G::Item]) -> Result<(), FillError>,
    ) -> Result<(), FillError> {
        let mut axes = Vec::with_capacity(P::DIMENSION);
        for _ in 0..P::DIMENSION {
            let mut col = vec![G::Item::default(); dst.len()];
            column(&mut self.inner, &mut col)?;
            axes.push(col);
        }
        for (i, slot) in dst.iter_mut().enumerate() {
            *slot = P::try_from_axes(|axis| {
                axes.get(axis)
                    .and_then(|col| col.get(i))
                    .copied()
                    .ok_or(FillError::IndexOutOfRange {
                        index: axis,
                        len: axes.len(),
                    })
            })?;
        }
        Ok(())
    }
}

impl<G, P> Fill for GeneratedPoints<G, P>
where
    G: Fill,
    G::Item: Copy,
    P: CoordinatePoint<G::Item>,
{
    type Item = P;
    type Bound = G::Bound;

    fn config(&self) -> &FillConfig {
        self.inner.config()
    }

    fn bound_domain(&self) -> BoundDomain {
        self.inner.bound_domain()
    }

    fn range_domain(&self) -> BoundDomain {
        self.inner.range_domain()
    }

    fn default_bound(&self) -> G::Bound {
        self.inner.default_bound()
    }

    fn default_range(&self) -> (G::Bound, G::Bound) {
        self.inner.default_range()
    }

    fn generate(&mut self, dst: &mut [P]) -> Result<(), FillError> {
        self.by_columns(dst, |g, col| g.generate(col))
    }

    fn generate_to_bound(&mut self, dst: &mut [P], bound: G::Bound) -> Result<(), FillError> {
        self.by_columns(dst, |g, col| g.generate_to_bound(col, bound))
    }

    fn generate_range(
        &mut self,
        dst: &mut [P],
        lower: G::Bound,
        upper: G::Bound,
    ) -> Result<(), FillError> {
        self.by_columns(dst, |g, col| g.generate_range(col, lower, upper))
    }
}

/// Reads X, then Y (then Z) for each point; out-of-window coordinates become
/// the sentinel, the others are kept.
///
/// ```
/// # use array_filler::fill::{Fill, ReadPoints};
/// # use array_filler::geometry::Point;
/// # use array_filler::source::ScriptedSource;
/// let mut pts = ReadPoints::<_, i32, Point<i32>>::new(ScriptedSource::new([5, 200]));
/// let got = pts.fill_new_range(1, Some(0), Some(100)).unwrap();
/// assert_eq!(got, vec![Point::new(5, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct ReadPoints<S, T, P> {
    inner: ReadNumbers<S, T>,
    _point: PhantomData<fn() -> P>,
}

impl<S, T, P> ReadPoints<S, T, P>
where
    S: ValueSource,
    T: FillValue,
    P: CoordinatePoint<T>,
{
    pub fn new(source: S) -> Self {
        Self {
            inner: ReadNumbers::new(source),
            _point: PhantomData,
        }
    }

    pub fn with_config(mut self, config: FillConfig) -> Result<Self, FillError> {
        self.inner = self.inner.with_config(config)?;
        Ok(self)
    }

    pub fn source(&self) -> &S {
        self.inner.source()
    }

    fn read_into(&mut self, dst: &mut [P], window: Option<(T, T)>) -> Result<(), FillError> {
        let inner = &mut self.inner;
        let points = (0..dst.len())
            .map(|_| P::try_from_axes(|_| inner.read_within(window)))
            .collect::<Result<Vec<_>, _>>()?;
        dst.copy_from_slice(&points);
        Ok(())
    }
}

impl<S, T, P> Fill for ReadPoints<S, T, P>
where
    S: ValueSource,
    T: FillValue,
    P: CoordinatePoint<T>,
{
    type Item = P;
    type Bound = T;

    fn config(&self) -> &FillConfig {
        self.inner.config()
    }

    fn bound_domain(&self) -> BoundDomain {
        self.inner.bound_domain()
    }

    fn range_domain(&self) -> BoundDomain {
        self.inner.range_domain()
    }

    fn default_bound(&self) -> T {
        self.inner.default_bound()
    }

    fn default_range(&self) -> (T, T) {
        self.inner.default_range()
    }

    fn generate(&mut self, dst: &mut [P]) -> Result<(), FillError> {
        self.read_into(dst, None)
    }

    fn generate_to_bound(&mut self, dst: &mut [P], bound: T) -> Result<(), FillError> {
        self.read_into(dst, Some((T::zero(), bound)))
    }

    fn generate_range(&mut self, dst: &mut [P], lower: T, upper: T) -> Result<(), FillError> {
        self.read_into(dst, Some((lower, upper)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3D;
    use crate::source::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn descending_points_share_each_axis_sequence() {
        let mut pts = DescendingPoints::<i64>::new(Descending::new());
        let got = pts.fill_new_range(3, Some(-1), Some(0)).unwrap();
        assert_eq!(
            got,
            vec![Point::new(0, 0), Point::new(-1, -1), Point::new(0, 0)]
        );
    }

    #[test]
    fn three_dimensional_generated() {
        let mut pts = AscendingPoints::<f64, Point3D<f64>>::new(Ascending::new());
        let got = pts.fill_new(2).unwrap();
        assert_eq!(got[1], Point3D::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn random_axes_are_independent_draws() {
        let mut pts = RandomPoints::<_, i32>::new(RandomNumbers::new(SmallRng::seed_from_u64(8)));
        let got = pts.fill_new_range(64, Some(0), Some(1000)).unwrap();
        assert!(got.iter().all(|p| (0..=1000).contains(&p.x()) && (0..=1000).contains(&p.y())));
        assert!(got.iter().any(|p| p.x() != p.y()));
    }

    #[test]
    fn generated_points_validate_like_numbers() {
        let mut pts = AscendingPoints::<i32>::new(Ascending::new());
        let mut buf = [Point::default(); 2];
        assert!(matches!(
            pts.fill_to_bound(&mut buf, Some(-1)),
            Err(FillError::BoundOutOfRange { .. })
        ));
        let mut empty: [Point<i32>; 0] = [];
        assert!(pts.fill(&mut empty).is_err());
    }

    #[test]
    fn reads_interleave_axes_per_point() {
        let mut pts = ReadPoints::<_, i32, Point<i32>>::new(ScriptedSource::new([1, 2, 3, 4]));
        let got = pts.fill_new(2).unwrap();
        assert_eq!(got, vec![Point::new(1, 2), Point::new(3, 4)]);
    }

    #[test]
    fn read_replaces_only_the_bad_coordinate() {
        let mut pts = ReadPoints::<_, i32, Point3D<i32>>::new(ScriptedSource::new([5, -1, 7]));
        let mut buf = [Point3D::default(); 1];
        pts.fill_to_bound(&mut buf, Some(10)).unwrap();
        assert_eq!(buf[0], Point3D::new(5, 0, 7));
        assert_eq!(pts.source().remaining(), 0);
    }

    #[test]
    fn read_points_fail_atomically() {
        let mut pts = ReadPoints::<_, i64, Point<i64>>::new(ScriptedSource::new([1, 2, 3]));
        let mut buf = [Point::new(9, 9); 2];
        assert_eq!(pts.fill(&mut buf), Err(FillError::SourceExhausted));
        assert_eq!(buf, [Point::new(9, 9); 2]);
    }
}
