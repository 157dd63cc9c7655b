//! Entry Store Module
//!
//! The ordered sequence of entries that makes up a properties document.
//!
//! ## Responsibilities
//! - Hold every logical line in source order (comments and blanks included)
//! - First-match lookup of value entries by key
//! - Removal by key and order-preserving bulk filtering
//!
//! ## Data Structure Choice
//! A plain `Vec<Entry>`: order is the serialized line order, keys need not be
//! unique, and every keyed operation is a linear scan from the front.

mod entries;

pub use entries::EntryStore;

use serde::{Deserialize, Serialize};

/// One logical line of a properties document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    /// A `#` or `!` comment, kept verbatim
    Comment { raw: String },

    /// An empty or whitespace-only line, kept verbatim
    Blank { raw: String },

    /// A key/value pair
    ///
    /// `key` and `value` are in logical (unescaped, decoded) form; `delimiter`
    /// is the separator text exactly as it appeared in the source.
    Value {
        key: String,
        delimiter: String,
        value: String,
    },
}

/// Discriminant of an [`Entry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Comment,
    Blank,
    Value,
}

impl Entry {
    /// Create a value entry
    pub fn value(
        key: impl Into<String>,
        delimiter: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Entry::Value {
            key: key.into(),
            delimiter: delimiter.into(),
            value: value.into(),
        }
    }

    /// Get the entry kind
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Comment { .. } => EntryKind::Comment,
            Entry::Blank { .. } => EntryKind::Blank,
            Entry::Value { .. } => EntryKind::Value,
        }
    }

    /// The key of a value entry
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::Value { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Whether this is a value entry for `key`
    pub fn has_key(&self, key: &str) -> bool {
        self.key() == Some(key)
    }

    pub fn is_value(&self) -> bool {
        self.kind() == EntryKind::Value
    }

    pub fn is_comment(&self) -> bool {
        self.kind() == EntryKind::Comment
    }

    pub fn is_blank(&self) -> bool {
        self.kind() == EntryKind::Blank
    }
}
