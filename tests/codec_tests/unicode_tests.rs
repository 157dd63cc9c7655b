//! Unicode Codec Tests
//!
//! Tests verify:
//! - `\uXXXX` decoding, including surrogate pairs
//! - Malformed escapes are left alone
//! - Line breaks are encoded and backslashes doubled
//! - The read path inverts encode

use dotprops::codec::{decode, encode, unescape};

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_basic_escape() {
    assert_eq!(decode("\\u2318"), "⌘");
    assert_eq!(decode("Command\\u0009\\u2318"), "Command\t⌘");
}

#[test]
fn test_decode_lower_case_hex() {
    assert_eq!(decode("caf\\u00e9"), "café");
}

#[test]
fn test_decode_without_escapes() {
    assert_eq!(decode("no escapes here"), "no escapes here");
    assert_eq!(decode(""), "");
}

#[test]
fn test_decode_leaves_malformed_escapes() {
    assert_eq!(decode("\\u12G4"), "\\u12G4");
    assert_eq!(decode("\\u12"), "\\u12");
    assert_eq!(decode("\\u"), "\\u");
    assert_eq!(decode("\\x0041"), "\\x0041");
}

#[test]
fn test_decode_escape_after_backslash() {
    assert_eq!(decode("\\\\u0041"), "\\A");
}

#[test]
fn test_decode_surrogate_pair() {
    assert_eq!(decode("\\uD83D\\uDE00"), "😀");
    assert_eq!(decode("smile \\ud83d\\ude00!"), "smile 😀!");
}

#[test]
fn test_decode_lone_surrogates_left_verbatim() {
    assert_eq!(decode("\\uD83D"), "\\uD83D");
    assert_eq!(decode("\\uD83Dx"), "\\uD83Dx");
    assert_eq!(decode("\\uDE00"), "\\uDE00");
    assert_eq!(decode("\\uD83D\\u0041"), "\\uD83DA");
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_plain_text_unchanged() {
    assert_eq!(encode("bar baz: quux = 1"), "bar baz: quux = 1");
    assert_eq!(encode("⌘"), "⌘");
}

#[test]
fn test_encode_line_breaks() {
    assert_eq!(encode("line1\nline2"), "line1\\\\u000Aline2");
    assert_eq!(encode("\r"), "\\\\u000D");
}

#[test]
fn test_encode_doubles_backslashes() {
    assert_eq!(encode("several\\escapes"), "several\\\\escapes");
    assert_eq!(encode("\\\\"), "\\\\\\\\");
}

// =============================================================================
// Read Path Inverse Tests
// =============================================================================

#[test]
fn test_read_path_inverts_encode() {
    let samples = [
        "",
        "plain value",
        "Command\t⌘\nOption\t⌥",
        "multi\nline\r\n",
        "C:\\dir\\file",
        "value with#several\\escapes",
        "ends with backslash\\",
    ];

    for sample in samples {
        assert_eq!(
            unescape(&decode(&encode(sample))),
            sample,
            "sample: {:?}",
            sample
        );
    }
}
