//! Store implementation
//!
//! HashMap-backed key-value table.

use std::collections::HashMap;

/// In-memory key-value table
///
/// A key maps to at most one value. Writing an existing key replaces its
/// value. Nothing is persisted; the contents live as long as the `Store`.
#[derive(Debug, Default, Clone)]
pub struct Store {
    data: HashMap<Vec<u8>, Vec<u8>>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair, replacing any previous value
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.data.insert(key, value);
    }

    /// Get the value stored under `key`
    ///
    /// `None` means the key is absent, which is distinct from an empty value.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }

    /// Remove a key
    ///
    /// Returns true iff the key was present before the call.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        self.data.remove(key).is_some()
    }

    /// Check whether a key is present
    pub fn exists(&self, key: &[u8]) -> bool {
        self.data.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
