//! Serializer
//!
//! Reassembles entries into text lines.

use crate::codec::{encode, escape};
use crate::store::Entry;

/// Assemble one entry back into its textual line
///
/// Comments and blanks come back verbatim. A value entry with an empty
/// value is written as its escaped key alone; otherwise the stored
/// delimiter sits between the escaped key and the encoded value.
pub fn assemble(entry: &Entry) -> String {
    match entry {
        Entry::Comment { raw } | Entry::Blank { raw } => raw.clone(),
        Entry::Value { key, value, .. } if value.is_empty() => escape(key),
        Entry::Value {
            key,
            delimiter,
            value,
        } => {
            let mut line = escape(key);
            line.push_str(delimiter);
            line.push_str(&encode(value));
            line
        }
    }
}

/// Assemble every entry, in order
pub fn assemble_lines<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(assemble).collect()
}
