//! Escape Codec Module
//!
//! Reversible transforms applied to keys and values between their logical
//! form (what `get` returns) and their textual form (what the file holds).
//!
//! ## Read / Write Paths
//! ```text
//!   text ──decode──▶ ──unescape──▶ logical      (tokenizer, keys and values)
//!   logical key   ──escape──▶ text              (serializer)
//!   logical value ──encode──▶ text              (serializer)
//! ```
//!
//! `escape`/`unescape` deal with structural ASCII punctuation, while
//! `encode`/`decode` deal with the backslash-introduced `\uXXXX` syntax, so
//! the order of application is fixed.

mod escape;
mod unicode;

pub use escape::{escape, unescape};
pub use unicode::{decode, encode};

/// Whitespace as understood by the `.properties` grammar
///
/// Space, tab, line feed, carriage return, form feed and vertical tab.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b')
}

/// Characters that may separate a key from its value
pub fn is_separator(c: char) -> bool {
    c == ':' || c == '=' || is_space(c)
}
