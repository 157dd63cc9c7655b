//! Single-line classification
//!
//! The delimiter matcher mirrors the pattern "optional whitespace run, one
//! separator char not preceded by a backslash, optional whitespace run",
//! taking the leftmost starting position and the longest leading run that
//! still lets the separator match.

use crate::codec::{decode, is_separator, is_space, unescape};
use crate::store::Entry;

/// Classify one logical line
pub fn tokenize(line: &str) -> Entry {
    let body = line.trim_start_matches(is_space);

    if body.starts_with(|c: char| c == '#' || c == '!') {
        return Entry::Comment {
            raw: line.to_string(),
        };
    }

    if body.is_empty() {
        return Entry::Blank {
            raw: line.to_string(),
        };
    }

    let body = body.trim_end_matches(is_space);
    let (key, delimiter, value) = match find_delimiter(body) {
        Some((start, end)) => (&body[..start], &body[start..end], &body[end..]),
        None => (body, "", ""),
    };

    Entry::Value {
        key: unescape(&decode(key)),
        delimiter: delimiter.to_string(),
        value: unescape(&decode(&fold_continuations(value))),
    }
}

/// Byte range of the first delimiter in a trimmed value line
fn find_delimiter(body: &str) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = body.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(body.len(), |&(offset, _)| offset);

    for start in 0..chars.len() {
        let run = space_run(&chars[start..]);

        for lead in (0..=run).rev() {
            let sep = start + lead;
            let Some(&(_, c)) = chars.get(sep) else {
                continue;
            };

            if !is_separator(c) || (sep > 0 && chars[sep - 1].1 == '\\') {
                continue;
            }

            let trail = space_run(&chars[sep + 1..]);
            return Some((byte_at(start), byte_at(sep + 1 + trail)));
        }
    }

    None
}

/// Length of the whitespace run at the front of `chars`
fn space_run(chars: &[(usize, char)]) -> usize {
    chars.iter().take_while(|&&(_, c)| is_space(c)).count()
}

/// Remove every backslash-newline along with the indentation that follows it
fn fold_continuations(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find("\\\n") {
        out.push_str(&rest[..pos]);
        rest = rest[pos + 2..].trim_start_matches(is_space);
    }

    out.push_str(rest);
    out
}
