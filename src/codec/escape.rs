//! Structural escapes
//!
//! Backslash-escaping of whitespace, `:`, `=` and the backslash itself.

use super::is_separator;

/// Insert a backslash before every whitespace char, `:`, `=` and `\`
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if is_separator(ch) || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Collapse every `\X` to `X`, left to right, non-overlapping
///
/// A trailing lone backslash is dropped.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
