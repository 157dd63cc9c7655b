//! EntryStore implementation
//!
//! Vec-backed, order-preserving storage with first-match lookup.

use super::{Entry, EntryKind};

/// Ordered entries of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `entries` in the given order
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append an entry at the end
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Number of entries of every kind
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in order
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Index of the first value entry for `key`
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.has_key(key))
    }

    /// Whether any value entry has `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Raw value of the first value entry for `key`
    pub fn find_value(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Value { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Mutable raw value of the first value entry for `key`
    pub fn find_value_mut(&mut self, key: &str) -> Option<&mut String> {
        self.entries.iter_mut().find_map(|entry| match entry {
            Entry::Value { key: k, value, .. } if k == key => Some(value),
            _ => None,
        })
    }

    /// Remove every value entry for `key`
    ///
    /// Returns the number of entries removed.
    pub fn remove_key(&mut self, key: &str) -> usize {
        self.retain(|entry| !entry.has_key(key))
    }

    /// Keep only entries of the given kinds
    ///
    /// Returns the number of entries removed.
    pub fn retain_kinds(&mut self, kinds: &[EntryKind]) -> usize {
        self.retain(|entry| kinds.contains(&entry.kind()))
    }

    /// Keep entries matching `keep`, preserving their relative order
    ///
    /// Returns the number of entries removed.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&Entry) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(keep);
        before - self.entries.len()
    }

    /// Overwrite the delimiter of every value entry
    pub fn set_delimiters(&mut self, delimiter: &str) {
        for entry in &mut self.entries {
            if let Entry::Value { delimiter: d, .. } = entry {
                d.clear();
                d.push_str(delimiter);
            }
        }
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
