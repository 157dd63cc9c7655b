//! Variable expansion
//!
//! Substitution of `${name}` references inside a raw value. Resolution of a
//! name is left to the caller, which recurses back into the model.

use crate::error::Result;

/// Opening marker of a reference
const OPEN: &str = "${";

/// Replace every `${name}` in `raw` for which `resolve` yields a value
///
/// `name` is the shortest non-empty run of characters, containing no line
/// feed, that ends at a `}`. References `resolve` answers with `None` for
/// are kept verbatim. Substituted text is not scanned again.
pub fn expand_references<F>(raw: &str, mut resolve: F) -> Result<String>
where
    F: FnMut(&str) -> Result<Option<String>>,
{
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find(OPEN) {
        out.push_str(&rest[..open]);
        let after = &rest[open + OPEN.len()..];

        match reference_name(after) {
            Some(name) => {
                let token_end = open + OPEN.len() + name.len() + 1;
                match resolve(name)? {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[open..token_end]),
                }
                rest = &rest[token_end..];
            }
            None => {
                out.push('$');
                rest = &rest[open + 1..];
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Name of the reference whose body starts `after`
fn reference_name(after: &str) -> Option<&str> {
    let mut chars = after.char_indices();

    // The first char belongs to the name even when it is a '}'
    let (_, first) = chars.next()?;
    if first == '\n' {
        return None;
    }

    for (i, c) in chars {
        match c {
            '}' => return Some(&after[..i]),
            '\n' => return None,
            _ => {}
        }
    }

    None
}
