#![cfg_attr(docsrs, feature(doc_cfg))]
//! # array-filler
//!
//! array-filler is a small library for building and populating numeric and
//! point sequences. It provides a growable, randomly indexable [`Container`]
//! and a family of fill strategies (ascending, descending, read-driven,
//! random) that write into fresh buffers, fresh containers, or buffers and
//! containers the caller already owns.
//!
//! ## Features
//! - [`Container`] with insert-at-cursor, indexed set/get that grows on
//!   demand, and delete-with-compaction
//! - Bounded fills with one fixed policy per call shape: calls on an existing
//!   destination reject bad input, calls that create the destination fall
//!   back to defaults
//! - The same strategies over `i32`, `i64`, `f64`, and 2D/3D points
//! - Pluggable [`ValueSource`](source::ValueSource) and
//!   [`RandomGenerator`](random::RandomGenerator) collaborators
//!
//! ## Determinism
//!
//! Random fills own a `SmallRng` seeded from [`FillConfig::seed`] so runs are
//! reproducible. Unit tests fix seeds explicitly.
//!
//! ## Usage
//!
//! ```
//! use array_filler::prelude::*;
//!
//! let mut asc = Ascending::<i32>::new();
//! // Existing buffer: invalid input is an error.
//! let mut buf = [0; 4];
//! asc.fill_to_bound(&mut buf, Some(2)).unwrap();
//! assert_eq!(buf, [0, 1, 2, 0]);
//! assert!(asc.fill_to_bound(&mut buf, Some(-1)).is_err());
//!
//! // New buffer: invalid input falls back to defaults.
//! let fresh = asc.fill_new(-5).unwrap();
//! assert_eq!(fresh.len(), 10);
//! ```

pub mod config;
pub mod data;
pub mod debug_invariants;
pub mod fill;
pub mod fill_error;
pub mod geometry;
pub mod random;
pub mod source;

pub use config::FillConfig;
pub use data::container::Container;
pub use debug_invariants::DebugInvariants;
pub use fill_error::FillError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::config::FillConfig;
    pub use crate::data::container::Container;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::fill::{
        Ascending, AscendingPoints, Descending, DescendingPoints, Fill, FillValue,
        GeneratedPoints, RandomNumbers, RandomPoints, ReadNumbers, ReadPoints,
    };
    pub use crate::fill_error::FillError;
    pub use crate::geometry::point::{CoordinatePoint, Point, Point3D};
    pub use crate::random::RandomGenerator;
    pub use crate::source::{ScriptedSource, TokenSource, ValueSource};
}
