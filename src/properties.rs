//! Properties Module
//!
//! The document model that coordinates every component.
//!
//! ## Responsibilities
//! - Build the entry store from raw text, lines or a file
//! - Keyed access (`get`/`set`/`delete`) with first-match semantics
//! - `${key}` expansion on read against the live store
//! - Structural filters and delimiter normalization
//! - Reassembly to lines/text and projection to the map view

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::config::Config;
use crate::error::{PropsError, Result};
use crate::expand::expand_references;
use crate::serializer::assemble_lines;
use crate::store::{Entry, EntryKind, EntryStore};
use crate::tokenizer::{split_logical_lines, tokenize};
use crate::view;

/// An editable, format-preserving `.properties` document
///
/// ## Lookup Model
///
/// - **Keyed operations** (`get`/`set`/`delete`'s return value): act on the
///   FIRST value entry with the key, in document order
/// - **`delete`**: removes ALL value entries with the key
/// - **Map view** (`to_map`, `keys`, `len`, ...): duplicate keys resolve to
///   the LAST entry's value
///
/// Both rules hold on the same instance at the same time.
#[derive(Clone, Default)]
pub struct Properties {
    /// Expansion and delimiter settings
    config: Config,

    /// Every logical line, in order
    store: EntryStore,
}

impl Properties {
    /// Create an empty document with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            store: EntryStore::new(),
        }
    }

    /// Build a document from logical lines already split by the caller
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines.into_iter().map(|line| tokenize(line.as_ref())).collect();
        Self {
            config: Config::default(),
            store: EntryStore::from_entries(entries),
        }
    }

    /// Parse raw text with the default config
    pub fn parse(text: &str) -> Self {
        Self::parse_with_config(text, Config::default())
    }

    /// Parse raw text
    ///
    /// Splits on newlines that are not continuations, then tokenizes each
    /// logical line.
    pub fn parse_with_config(text: &str, config: Config) -> Self {
        let mut props = Self::from_lines(split_logical_lines(text));
        props.config = config;

        tracing::debug!(
            "Parsed {} entries ({} values) from {} bytes",
            props.store.len(),
            props.store.iter().filter(|e| e.is_value()).count(),
            text.len()
        );

        props
    }

    /// Read and parse a file with the default config
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(path, Config::default())
    }

    /// Read and parse a file
    pub fn load_with_config(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        tracing::debug!("Loading properties from {}", path.display());
        Ok(Self::parse_with_config(&text, config))
    }

    /// Write the assembled text to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text())?;

        tracing::debug!("Saved {} entries to {}", self.store.len(), path.display());
        Ok(())
    }

    // =========================================================================
    // Keyed Access
    // =========================================================================

    /// Get the value of the first entry for `key`
    ///
    /// Expands references when `auto_expand` is set. `Ok(None)` means the key
    /// is absent, which is distinct from `Ok(Some(""))`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_with(key, self.config.auto_expand)
    }

    /// Get the value of the first entry for `key`, choosing whether to expand
    ///
    /// Each `${name}` naming a known key is replaced by that key's expanded
    /// value; other references are left as written. Fails with
    /// `CyclicReference` if a key is reached again while being expanded.
    pub fn get_with(&self, key: &str, expand: bool) -> Result<Option<String>> {
        let Some(raw) = self.store.find_value(key) else {
            return Ok(None);
        };

        if !expand {
            return Ok(Some(raw.to_string()));
        }

        let mut stack = Vec::new();
        self.expand_value(key, raw, &mut stack).map(Some)
    }

    /// Raw value of the first entry for `key`, never expanded
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.store.find_value(key)
    }

    /// Set the value of the first entry for `key`
    ///
    /// An existing entry keeps its key text, delimiter and position. A new
    /// key is appended with the configured default delimiter.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some(slot) = self.store.find_value_mut(&key) {
            tracing::trace!("Updating '{}'", key);
            *slot = value;
            return;
        }

        tracing::trace!("Appending '{}'", key);
        let entry = Entry::value(key, self.config.default_delimiter.as_str(), value);
        self.store.push(entry);
    }

    /// Remove every entry for `key`
    ///
    /// Returns the value `get` would have returned before the removal. An
    /// absent key removes nothing and returns `Ok(None)`. If expanding the
    /// prior value fails, nothing is removed.
    pub fn delete(&mut self, key: &str) -> Result<Option<String>> {
        let prior = self.get(key)?;
        let removed = self.store.remove_key(key);

        tracing::trace!("Deleted {} entries for '{}'", removed, key);
        Ok(prior)
    }

    /// Tokenize `line` as a new logical line and append it
    pub fn append(&mut self, line: &str) {
        self.store.push(tokenize(line));
    }

    /// Whether any value entry has `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Expand `raw`, the value stored under `key`
    ///
    /// `stack` holds the keys currently being expanded, outermost first.
    fn expand_value(&self, key: &str, raw: &str, stack: &mut Vec<String>) -> Result<String> {
        if stack.iter().any(|k| k == key) {
            let mut chain = stack.clone();
            chain.push(key.to_string());
            tracing::warn!("Reference cycle while expanding: {}", chain.join(" -> "));
            return Err(PropsError::CyclicReference {
                key: key.to_string(),
                chain,
            });
        }

        stack.push(key.to_string());
        let expanded = expand_references(raw, |name| match self.store.find_value(name) {
            Some(value) => self.expand_value(name, value, stack).map(Some),
            None => Ok(None),
        });
        stack.pop();

        expanded
    }

    // =========================================================================
    // Structural Edits
    // =========================================================================

    /// Remove all comments and blank lines, leaving only values
    pub fn compact(&mut self) {
        let removed = self.store.retain_kinds(&[EntryKind::Value]);
        tracing::trace!("Compacted {} entries", removed);
    }

    /// Replace every value entry's delimiter with the default delimiter
    pub fn normalize_delimiters(&mut self) {
        self.store.set_delimiters(&self.config.default_delimiter);
    }

    /// Remove all blank lines, leaving comments and values
    pub fn strip_blanks(&mut self) {
        let removed = self
            .store
            .retain_kinds(&[EntryKind::Comment, EntryKind::Value]);
        tracing::trace!("Stripped {} blank lines", removed);
    }

    /// Remove all comments, leaving blank lines and values
    pub fn strip_comments(&mut self) {
        let removed = self.store.retain_kinds(&[EntryKind::Blank, EntryKind::Value]);
        tracing::trace!("Stripped {} comments", removed);
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// The assembled document as one string per entry
    pub fn to_lines(&self) -> Vec<String> {
        assemble_lines(&self.store)
    }

    /// The assembled document, lines joined by `\n`
    pub fn to_text(&self) -> String {
        self.to_lines().join("\n")
    }

    /// Every key mapped to its raw value, last entry winning
    ///
    /// Keys come out in document order of their first occurrence.
    pub fn to_map(&self) -> IndexMap<String, String> {
        view::project(&self.store)
    }

    /// Distinct keys, in map view order
    pub fn keys(&self) -> Vec<String> {
        self.to_map().into_keys().collect()
    }

    /// Raw values, in map view order
    pub fn values(&self) -> Vec<String> {
        self.to_map().into_values().collect()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.to_map().len()
    }

    /// Whether the document has no value entries
    pub fn is_empty(&self) -> bool {
        !self.store.iter().any(Entry::is_value)
    }

    /// The map view as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        view::map_to_json(&self.to_map())
    }

    /// The entry list as pretty-printed JSON
    pub fn entries_to_json(&self) -> Result<String> {
        view::entries_to_json(self.store.as_slice())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All entries in document order
    pub fn entries(&self) -> &[Entry] {
        self.store.as_slice()
    }

    /// Number of entries of every kind
    pub fn entry_count(&self) -> usize {
        self.store.len()
    }

    /// Whether `get` expands references
    pub fn auto_expand(&self) -> bool {
        self.config.auto_expand
    }

    pub fn set_auto_expand(&mut self, enabled: bool) {
        self.config.auto_expand = enabled;
    }

    /// Delimiter used for new entries and by `normalize_delimiters`
    pub fn default_delimiter(&self) -> &str {
        &self.config.default_delimiter
    }

    pub fn set_default_delimiter(&mut self, delimiter: impl Into<String>) {
        self.config.default_delimiter = delimiter.into();
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.to_map()).finish()
    }
}
