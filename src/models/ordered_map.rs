//! Insertion-ordered associative container backing the board tables.
//!
//! Board files are small (tens of entries), and the order entries appear in
//! the file is the order they must come back out, so the map is a plain
//! vector of pairs searched linearly. Iteration order is the canonical
//! serialization order.

use std::borrow::Borrow;
use thiserror::Error;

/// Errors raised by [`OrderedMap`] operations.
///
/// These never cross the `Category`/`Board` boundary; callers of those types
/// see [`crate::error::BoardError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The key is the reserved absent sentinel and can never be inserted.
    #[error("key is the reserved empty sentinel and cannot be inserted")]
    InvalidKey,
    /// Lookup miss.
    #[error("key not found")]
    KeyNotFound,
    /// Positional access outside `[0, len)`.
    #[error("index {index} out of range for map of size {size}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Map size at the time of the call.
        size: usize,
    },
}

/// Key type usable in an [`OrderedMap`].
///
/// Each key type designates a reserved "absent" sentinel that may never be
/// stored; for string keys that is the empty string.
pub trait MapKey: Eq {
    /// Returns true when the key is the reserved absent sentinel.
    fn is_absent(&self) -> bool;
}

impl MapKey for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl MapKey for &str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// Associative container with unique keys and insertion-ordered iteration.
///
/// Re-inserting an existing key overwrites the value in place and keeps the
/// key's original position. There is no remove operation; the board file
/// format never shrinks a table within a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: MapKey, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or overwrites the value at `key`.
    ///
    /// Overwriting keeps the key's original position. Fails only when `key`
    /// is the reserved absent sentinel, never for a merely unseen key.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key.is_absent()`.
    pub fn set(&mut self, key: K, value: V) -> Result<(), MapError> {
        if key.is_absent() {
            return Err(MapError::InvalidKey);
        }

        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *slot = value;
        } else {
            self.entries.push((key, value));
        }

        Ok(())
    }

    /// Returns the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(MapError::KeyNotFound)
    }

    /// Returns a mutable reference to the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, MapError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(MapError::KeyNotFound)
    }

    /// Returns true if `key` is present. Total; never fails.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().any(|(k, _)| k.borrow() == key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in insertion order. Each call starts a fresh pass.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Returns the pair at position `index` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IndexOutOfRange`] unless `index < len()`.
    pub fn pair_at(&self, index: usize) -> Result<(&K, &V), MapError> {
        self.entries
            .get(index)
            .map(|(k, v)| (k, v))
            .ok_or(MapError::IndexOutOfRange {
                index,
                size: self.entries.len(),
            })
    }
}
