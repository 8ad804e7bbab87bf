//! `Point` and `Point3D`: plain coordinate holders filled by point strategies.
//!
//! Both are `Copy` value types with structural equality and hashing. They
//! carry no behaviour beyond accessors; the point fill strategies build them
//! through [`CoordinatePoint`], which lets one algorithm serve both
//! dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T: Copy> Point<T> {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }
}

/// A 3D point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point3D<T> {
    x: T,
    y: T,
    z: T,
}

impl<T: Copy> Point3D<T> {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Point3D { x, y, z }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn z(&self) -> T {
        self.z
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A point type that can be assembled one coordinate at a time.
///
/// Coordinates are requested in axis order (x, then y, then z), which is
/// the order read-driven fills consume their source in.
pub trait CoordinatePoint<T>: Copy + Default {
    /// Number of coordinates.
    const DIMENSION: usize;

    /// Build a point by asking `coord` for each axis in order, stopping at the
    /// first error.
    fn try_from_axes<E>(coord: impl FnMut(usize) -> Result<T, E>) -> Result<Self, E>;
}

impl<T: Copy + Default> CoordinatePoint<T> for Point<T> {
    const DIMENSION: usize = 2;

    fn try_from_axes<E>(mut coord: impl FnMut(usize) -> Result<T, E>) -> Result<Self, E> {
        let x = coord(0)?;
        let y = coord(1)?;
        Ok(Point::new(x, y))
    }
}

impl<T: Copy + Default> CoordinatePoint<T> for Point3D<T> {
    const DIMENSION: usize = 3;

    fn try_from_axes<E>(mut coord: impl FnMut(usize) -> Result<T, E>) -> Result<Self, E> {
        let x = coord(0)?;
        let y = coord(1)?;
        let z = coord(2)?;
        Ok(Point3D::new(x, y, z))
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_size, assert_impl_all};

    assert_eq_size!(Point<i32>, [i32; 2]);
    assert_eq_size!(Point3D<f64>, [f64; 3]);
    assert_impl_all!(Point<f64>: Copy, Send, Sync);
}
