//! View Projector
//!
//! Derives the key → raw value map from the entry store on demand. Duplicate
//! keys resolve last-write-wins here, unlike the first-match rule used by
//! `get`/`set`/`delete`. Keys iterate in document order of their first
//! occurrence.

use indexmap::IndexMap;

use crate::error::{PropsError, Result};
use crate::store::{Entry, EntryStore};

/// Map every value entry's key to its raw value, later entries winning
///
/// A repeated key keeps the position it was first seen at.
pub fn project(store: &EntryStore) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for entry in store {
        if let Entry::Value { key, value, .. } = entry {
            map.insert(key.clone(), value.clone());
        }
    }
    map
}

/// Render the map view as pretty-printed JSON
pub fn map_to_json(map: &IndexMap<String, String>) -> Result<String> {
    serde_json::to_string_pretty(map)
        .map_err(|e| PropsError::Serialization(format!("map view: {}", e)))
}

/// Render the entry list as pretty-printed JSON
pub fn entries_to_json(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| PropsError::Serialization(format!("entries: {}", e)))
}
