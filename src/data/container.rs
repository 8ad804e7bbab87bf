//! Container: a growable, index-addressable run of optional slots.
//!
//! A `Container<T>` owns its backing [`VecStorage`] and keeps an insertion
//! cursor marking the next slot [`Container::add`] will try. Slots start
//! empty (`None`) and are populated by `add`, `set`, or a fill strategy.
//!
//! Growth is one slot at a time: an `add` past the end, or a `set` beyond
//! the end, extends the storage just far enough to hold the write. The only
//! way to shrink is [`Container::delete`], which compacts the tail.

use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;

use crate::config::{DEFAULT_LENGTH, MAX_SLOTS};
use crate::data::storage::{Storage, VecStorage};
use crate::debug_invariants::DebugInvariants;
use crate::fill::checks;
use crate::fill_error::FillError;

/// Growable, index-addressable sequence of optional values.
///
/// Equality and hashing are structural over the slots; the cursor does not
/// take part.
///
/// ```
/// # use array_filler::data::Container;
/// let mut c = Container::with_length(3);
/// c.add(1);
/// c.add(2);
/// c.set(5, 9).unwrap();
/// assert_eq!(c.len(), 6);
/// assert_eq!(c.get(5), Some(&9));
/// assert_eq!(c.get(100), None);
/// ```
#[derive(Clone)]
pub struct Container<T> {
    storage: VecStorage<Option<T>>,
    /// Next slot `add` writes to; always `<= len`.
    cursor: usize,
}

impl<T> Container<T> {
    /// A container of [`DEFAULT_LENGTH`] empty slots.
    pub fn new() -> Self {
        Self::with_empty_slots(DEFAULT_LENGTH)
    }

    /// A container of `length` empty slots.
    ///
    /// A length outside `(0, 32767]` falls back to [`DEFAULT_LENGTH`].
    pub fn with_length(length: i64) -> Self {
        Self::with_empty_slots(Self::checked_length(length))
    }

    /// Adopt `buffer` as the backing storage without copying.
    ///
    /// `None` behaves like [`Container::new`].
    pub fn from_buffer(buffer: Option<Vec<Option<T>>>) -> Self {
        match buffer {
            Some(slots) => Self {
                storage: VecStorage::from(slots),
                cursor: 0,
            },
            None => Self::new(),
        }
    }

    fn with_empty_slots(len: usize) -> Self {
        Self {
            storage: VecStorage::with_len(len, || None),
            cursor: 0,
        }
    }

    fn checked_length(length: i64) -> usize {
        if checks::valid_length(length) {
            length as usize
        } else {
            log::debug!("container length {length} out of range; using {DEFAULT_LENGTH}");
            DEFAULT_LENGTH
        }
    }

    /// Discard every slot and start over with `length` empty slots.
    ///
    /// Same defaulting rule as [`Container::with_length`].
    pub fn reset(&mut self, length: i64) {
        *self = Self::with_length(length);
    }

    /// Discard every slot and adopt `buffer`, as [`Container::from_buffer`].
    pub fn replace_buffer(&mut self, buffer: Option<Vec<Option<T>>>) {
        *self = Self::from_buffer(buffer);
    }

    /// Replace the contents with `values`, every slot occupied.
    ///
    /// The cursor moves to the end, so the next `add` appends.
    pub fn set_values(&mut self, values: Vec<T>) {
        self.storage = VecStorage::from(values.into_iter().map(Some).collect::<Vec<_>>());
        self.cursor = self.storage.len();
    }

    /// Current capacity in slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// `true` when the container has no slots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Index of the next slot `add` will try.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Value at `index`; `None` for an empty slot or an index outside `[0, len)`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.as_slice().get(index).and_then(Option::as_ref)
    }

    /// Write `value` at `index`, growing the storage until `index` fits.
    ///
    /// The cursor advances by one on every call, overwrites included, and
    /// never passes the end.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= MAX_SLOTS` or the storage cannot grow
    /// that far; the container is left unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), FillError> {
        if index >= self.len() {
            let new_len = match index.checked_add(1) {
                Some(n) if n <= MAX_SLOTS => n,
                _ => {
                    return Err(FillError::IndexOutOfRange {
                        index,
                        len: self.len(),
                    });
                }
            };
            log::trace!("container grows {} -> {new_len}", self.len());
            self.storage.try_resize(new_len, || None)?;
            self.cursor = self.len();
        } else {
            self.cursor = (self.cursor + 1).min(self.len());
        }
        self.storage.as_mut_slice()[index] = Some(value);
        crate::debug_invariants!(self.validate_invariants(), "Container::set");
        Ok(())
    }

    /// Append `value` at the cursor if that slot is empty; otherwise grow by
    /// one slot and write there.
    pub fn add(&mut self, value: T) {
        let cursor = self.cursor;
        let free = self
            .storage
            .as_slice()
            .get(cursor)
            .is_some_and(Option::is_none);
        if free {
            self.storage.as_mut_slice()[cursor] = Some(value);
            self.cursor = cursor + 1;
        } else {
            let last = self.len();
            self.grow_to(last + 1);
            self.storage.as_mut_slice()[last] = Some(value);
            self.cursor = last + 1;
        }
        crate::debug_invariants!(self.validate_invariants(), "Container::add");
    }

    /// Remove the slot at `index` and compact; the length drops by one.
    ///
    /// Returns the removed slot's value.
    pub fn delete(&mut self, index: usize) -> Result<Option<T>, FillError> {
        let removed = self.storage.remove(index)?;
        if index < self.cursor {
            self.cursor -= 1;
        }
        self.cursor = self.cursor.min(self.len());
        log::trace!("container compacted at {index}; len now {}", self.len());
        crate::debug_invariants!(self.validate_invariants(), "Container::delete");
        Ok(removed)
    }

    /// Iterate over every slot, empty ones as `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.storage.as_slice().iter().map(Option::as_ref)
    }

    /// Iterate over occupied slots only.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.storage.as_slice().iter().flatten()
    }

    /// All slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Option<T>] {
        self.storage.as_slice()
    }

    /// Consume the container and return its slots.
    pub fn into_vec(self) -> Vec<Option<T>> {
        self.storage.into_inner()
    }

    fn grow_to(&mut self, new_len: usize) {
        log::trace!("container grows {} -> {new_len}", self.len());
        self.storage.resize(new_len, || None);
    }
}

impl<T: PartialEq> Container<T> {
    /// Delete the first slot equal to `value`. Returns `false` if none matched.
    pub fn delete_value(&mut self, value: &T) -> bool {
        let found = self
            .storage
            .as_slice()
            .iter()
            .position(|slot| slot.as_ref() == Some(value));
        match found {
            Some(index) => self.delete(index).is_ok(),
            None => false,
        }
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(values: Vec<T>) -> Self {
        let mut c = Self::from_buffer(Some(Vec::new()));
        c.set_values(values);
        c
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T: Hash> Hash for Container<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("slots", &self.as_slice())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// `Container[1, _, 3]`, with `_` marking empty slots.
impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .iter()
            .map(|slot| match slot {
                Some(v) => v.to_string(),
                None => "_".to_owned(),
            })
            .join(", ");
        write!(f, "Container[{body}]")
    }
}

impl<T> DebugInvariants for Container<T> {
    fn validate_invariants(&self) -> Result<(), FillError> {
        if self.cursor > self.len() {
            return Err(FillError::IndexOutOfRange {
                index: self.cursor,
                len: self.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lengths_default() {
        assert_eq!(Container::<i32>::with_length(-5).len(), DEFAULT_LENGTH);
        assert_eq!(Container::<i32>::with_length(0).len(), DEFAULT_LENGTH);
        assert_eq!(Container::<i32>::with_length(32_768).len(), DEFAULT_LENGTH);
        assert_eq!(Container::<i32>::with_length(32_767).len(), 32_767);
        assert_eq!(Container::<i32>::new().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn from_buffer_adopts_or_defaults() {
        let c = Container::from_buffer(Some(vec![Some(1), None]));
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(0), Some(&1));
        assert_eq!(c.get(1), None);

        let d = Container::<u8>::from_buffer(None);
        assert_eq!(d.len(), DEFAULT_LENGTH);
        assert!(d.iter().all(|s| s.is_none()));
    }

    #[test]
    fn get_out_of_range_is_empty() {
        let c = Container::<i32>::new();
        assert_eq!(c.get(100), None);
    }

    #[test]
    fn set_grows_until_index_fits() {
        let mut c = Container::new();
        c.set(15, 'v').unwrap();
        assert!(c.len() >= 16);
        assert_eq!(c.len(), 16);
        assert_eq!(c.get(15), Some(&'v'));
        assert!(c.iter().take(15).all(|s| s.is_none()));
        assert_eq!(c.cursor(), 16);
    }

    #[test]
    fn set_overwrite_still_advances_cursor() {
        let mut c = Container::with_length(3);
        c.set(0, 1).unwrap();
        c.set(0, 2).unwrap();
        assert_eq!(c.cursor(), 2);
        assert_eq!(c.get(0), Some(&2));
        // Saturates at the end.
        c.set(0, 3).unwrap();
        c.set(0, 4).unwrap();
        assert_eq!(c.cursor(), 3);
        c.validate_invariants().unwrap();
    }

    #[test]
    fn set_rejects_indices_it_cannot_grow_to() {
        let mut c = Container::with_length(4);
        c.add(1);
        for index in [usize::MAX, MAX_SLOTS] {
            assert_eq!(
                c.set(index, 2),
                Err(FillError::IndexOutOfRange { index, len: 4 })
            );
        }
        assert_eq!(c.len(), 4);
        assert_eq!(c.cursor(), 1);
        assert_eq!(c.as_slice(), &[Some(1), None, None, None]);
    }

    #[test]
    fn add_fills_then_grows_by_one() {
        let mut c = Container::with_length(2);
        c.add(10);
        c.add(20);
        assert_eq!(c.len(), 2);
        c.add(30);
        assert_eq!(c.len(), 3);
        assert_eq!(c.get(2), Some(&30));
        c.add(40);
        assert_eq!(c.len(), 4);
        assert_eq!(c.values().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn add_on_occupied_slot_grows_instead() {
        let mut c = Container::with_length(3);
        c.set(1, 7).unwrap(); // cursor -> 1, slot 1 occupied
        c.add(8);
        assert_eq!(c.len(), 4);
        assert_eq!(c.get(1), Some(&7));
        assert_eq!(c.get(3), Some(&8));
        assert_eq!(c.get(0), None);
    }

    #[test]
    fn delete_compacts_and_preserves_order() {
        let mut c: Container<i32> = (1..=5).collect();
        assert_eq!(c.delete(2), Ok(Some(3)));
        assert_eq!(c.len(), 4);
        assert_eq!(c.values().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
        assert_eq!(c.cursor(), 4);
    }

    #[test]
    fn delete_out_of_range_errors() {
        let mut c = Container::<i32>::with_length(5);
        let err = c.delete(5).unwrap_err();
        assert_eq!(err, FillError::IndexOutOfRange { index: 5, len: 5 });
        assert_eq!(err.to_string(), "Index 5 out of range [0, 4]");
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn delete_value_removes_first_match_only() {
        let mut c: Container<i32> = vec![4, 1, 4].into();
        assert!(c.delete_value(&4));
        assert_eq!(c.values().copied().collect::<Vec<_>>(), vec![1, 4]);
        assert!(!c.delete_value(&9));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn delete_to_empty_then_add() {
        let mut c: Container<i32> = vec![1].into();
        c.delete(0).unwrap();
        assert!(c.is_empty());
        c.add(2);
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(0), Some(&2));
    }

    #[test]
    fn reset_and_replace() {
        let mut c: Container<i32> = vec![1, 2].into();
        c.reset(4);
        assert_eq!(c.len(), 4);
        assert_eq!(c.cursor(), 0);
        c.replace_buffer(None);
        assert_eq!(c.len(), DEFAULT_LENGTH);
    }

    #[test]
    fn structural_equality_ignores_cursor() {
        let mut a = Container::with_length(2);
        a.set(1, 5).unwrap();
        let b = Container::from_buffer(Some(vec![None, Some(5)]));
        assert_ne!(a.cursor(), b.cursor());
        assert_eq!(a, b);
    }

    #[test]
    fn display_marks_empty_slots() {
        let c = Container::from_buffer(Some(vec![Some(1), None, Some(3)]));
        assert_eq!(c.to_string(), "Container[1, _, 3]");
    }
}
