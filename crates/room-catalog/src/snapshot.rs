//! Read-only copies of a collection.
//!
//! A [`Snapshot`] captures its source at creation time. Later changes to the
//! source are not reflected, and every write method fails with
//! [`CatalogError::ReadOnly`].

use std::slice;

use crate::error::CatalogError;

/// An immutable copy of a sequence of values.
///
/// # Example
///
/// ```
/// use room_catalog::{CatalogError, Snapshot};
///
/// let mut source = vec![1, 2, 3];
/// let mut snapshot: Snapshot<i32> = source.iter().copied().collect();
/// source.push(4);
///
/// assert_eq!(snapshot.len(), 3);
/// assert_eq!(
///     snapshot.try_push(4),
///     Err(CatalogError::ReadOnly { operation: "push" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    items: Vec<T>,
}

impl<T> Snapshot<T> {
    /// Iterates over the captured values in source order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of captured values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was captured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the value at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Copies the captured values into a new, mutable vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Always fails: snapshots cannot grow.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ReadOnly`] unconditionally.
    pub fn try_push(&mut self, _value: T) -> Result<(), CatalogError> {
        Err(CatalogError::ReadOnly { operation: "push" })
    }

    /// Always fails: snapshots cannot shrink.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ReadOnly`] unconditionally.
    pub const fn try_remove(&mut self, _index: usize) -> Result<T, CatalogError> {
        Err(CatalogError::ReadOnly { operation: "remove" })
    }

    /// Always fails: snapshots cannot be emptied.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ReadOnly`] unconditionally.
    pub const fn try_clear(&mut self) -> Result<(), CatalogError> {
        Err(CatalogError::ReadOnly { operation: "clear" })
    }
}

impl<T> FromIterator<T> for Snapshot<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
