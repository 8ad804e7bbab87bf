//! Geometry module: point value types
pub mod point;

pub use point::{CoordinatePoint, Point, Point3D};
