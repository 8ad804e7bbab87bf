//! Pluggable backing storage for [`Container`](crate::data::container::Container).
//!
//! The container only needs a resizable, indexable run of slots with
//! order-preserving removal; this trait names exactly that, with a
//! `Vec`-backed default.

use core::fmt::{self, Debug};

use crate::fill_error::FillError;

/// Contiguous, indexable storage for `V` with slice access.
pub trait Storage<V>: Debug {
    /// Construct a buffer of `len`, each cell produced by `fill`.
    fn with_len(len: usize, fill: impl FnMut() -> V) -> Self;

    /// Current length in elements.
    fn len(&self) -> usize;

    /// `true` when the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resize to `new_len`, new cells produced by `fill`.
    fn resize(&mut self, new_len: usize, fill: impl FnMut() -> V);

    /// As [`Storage::resize`], but reports an allocation failure as
    /// `IndexOutOfRange` instead of aborting; the buffer is unchanged then.
    fn try_resize(&mut self, new_len: usize, fill: impl FnMut() -> V) -> Result<(), FillError>;

    /// Entire read-only buffer.
    fn as_slice(&self) -> &[V];

    /// Entire mutable buffer.
    fn as_mut_slice(&mut self) -> &mut [V];

    /// Remove the element at `index`, shifting the tail left by one.
    fn remove(&mut self, index: usize) -> Result<V, FillError>;
}

/// `Vec`-backed storage (default).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VecStorage<V>(pub(crate) Vec<V>);

impl<V> Debug for VecStorage<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecStorage")
            .field("len", &self.0.len())
            .finish()
    }
}

impl<V> Storage<V> for VecStorage<V> {
    fn with_len(len: usize, fill: impl FnMut() -> V) -> Self {
        let mut v = Vec::with_capacity(len);
        v.resize_with(len, fill);
        Self(v)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn resize(&mut self, new_len: usize, fill: impl FnMut() -> V) {
        self.0.resize_with(new_len, fill);
    }

    fn try_resize(&mut self, new_len: usize, fill: impl FnMut() -> V) -> Result<(), FillError> {
        let len = self.0.len();
        self.0
            .try_reserve(new_len.saturating_sub(len))
            .map_err(|_| FillError::IndexOutOfRange {
                index: new_len.saturating_sub(1),
                len,
            })?;
        self.0.resize_with(new_len, fill);
        Ok(())
    }

    fn as_slice(&self) -> &[V] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.0
    }

    fn remove(&mut self, index: usize) -> Result<V, FillError> {
        if index >= self.0.len() {
            return Err(FillError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }
}

impl<V> From<Vec<V>> for VecStorage<V> {
    fn from(v: Vec<V>) -> Self {
        Self(v)
    }
}

impl<V> VecStorage<V> {
    /// Consume the storage and return the underlying `Vec`.
    pub fn into_inner(self) -> Vec<V> {
        self.0
    }
}
