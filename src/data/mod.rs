//! Data module: container and its backing storage
#![warn(missing_docs)]

pub mod container;
pub mod storage;

pub use crate::debug_invariants::DebugInvariants;

pub use container::Container;
pub use storage::{Storage, VecStorage};
