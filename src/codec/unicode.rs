//! Unicode escapes
//!
//! Java-style `\uXXXX` escapes. Values written back to text get their line
//! breaks encoded and their backslashes doubled; text read from a file gets
//! its escapes replaced by the code points they name.

/// Length of the `\u` prefix
const PREFIX_LEN: usize = 2;

/// Number of hex digits following the prefix
const HEX_LEN: usize = 4;

/// Encode a logical value for writing
///
/// CR and LF become `\u000D` and `\u000A`, then every backslash in the
/// result (including those just introduced) is doubled.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\r' | '\n' => {
                out.push_str("\\\\u");
                out.push_str(&format!("{:04X}", ch as u32));
            }
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace every `\uXXXX` escape with the code point it names
///
/// A high surrogate escape immediately followed by a low surrogate escape
/// decodes to the supplementary code point they form together. Escapes that
/// still name a lone surrogate are left untouched.
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("\\u") {
        out.push_str(&rest[..pos]);
        let digits = &rest[pos + PREFIX_LEN..];

        match decode_escape(digits) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &digits[consumed..];
            }
            None => {
                out.push('\\');
                rest = &rest[pos + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode the escape whose hex digits start `digits`
///
/// Returns the char and the number of bytes consumed after the first `\u`.
fn decode_escape(digits: &str) -> Option<(char, usize)> {
    let unit = hex_unit(digits)?;

    if (0xD800..0xDC00).contains(&unit) {
        let low = digits[HEX_LEN..]
            .strip_prefix("\\u")
            .and_then(hex_unit)
            .filter(|low| (0xDC00..0xE000).contains(low));

        if let Some(low) = low {
            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code).map(|ch| (ch, HEX_LEN + PREFIX_LEN + HEX_LEN));
        }
    }

    char::from_u32(unit).map(|ch| (ch, HEX_LEN))
}

/// Parse exactly four leading hex digits
fn hex_unit(digits: &str) -> Option<u32> {
    let bytes = digits.as_bytes();
    if bytes.len() < HEX_LEN || !bytes[..HEX_LEN].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u32::from_str_radix(&digits[..HEX_LEN], 16).ok()
}
