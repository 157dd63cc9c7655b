//! Logical line splitting

/// Split raw text on every `\n` not immediately preceded by a backslash
///
/// Continuations stay inside their logical line for the tokenizer to fold.
/// A trailing newline yields a final empty line so the text can be
/// reassembled exactly; empty input yields no lines.
pub fn split_logical_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        if byte == b'\n' && (i == 0 || bytes[i - 1] != b'\\') {
            lines.push(&text[start..i]);
            start = i + 1;
        }
    }

    lines.push(&text[start..]);
    lines
}
