//! Line Tokenizer Module
//!
//! Turns raw text into entries.
//!
//! ## Responsibilities
//! - Split raw text into logical lines (backslash-newline does not end a line)
//! - Classify each logical line as Comment, Blank or Value
//! - Capture the exact delimiter text of value lines for reassembly
//!
//! ## Classification Order
//! ```text
//!   leading ws, then '#' or '!'  ──▶ Comment (verbatim)
//!   whitespace only / empty      ──▶ Blank   (verbatim)
//!   anything else                ──▶ Value   { key, delimiter, value }
//! ```

mod line;
mod lines;

pub use line::tokenize;
pub use lines::split_logical_lines;
