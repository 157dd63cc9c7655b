//! Escape Tests
//!
//! Tests verify:
//! - Structural characters are backslash-escaped
//! - Unescape collapses `\X` pairs left to right
//! - Unescape inverts escape

use dotprops::codec::{escape, unescape};

// =============================================================================
// Escape Tests
// =============================================================================

#[test]
fn test_escape_plain_text_unchanged() {
    assert_eq!(escape("foo.bar"), "foo.bar");
    assert_eq!(escape(""), "");
}

#[test]
fn test_escape_space() {
    assert_eq!(escape("foo bar"), "foo\\ bar");
}

#[test]
fn test_escape_separators() {
    assert_eq!(escape("a:b=c"), "a\\:b\\=c");
}

#[test]
fn test_escape_backslash_and_tab() {
    assert_eq!(escape("c\\d\te"), "c\\\\d\\\te");
}

#[test]
fn test_escape_leaves_comment_markers() {
    assert_eq!(escape("#key!"), "#key!");
}

// =============================================================================
// Unescape Tests
// =============================================================================

#[test]
fn test_unescape_removes_single_backslashes() {
    assert_eq!(unescape("foo\\ bar"), "foo bar");
    assert_eq!(unescape("with\\#several"), "with#several");
}

#[test]
fn test_unescape_collapses_doubled_backslash() {
    assert_eq!(unescape("several\\\\escapes"), "several\\escapes");
    assert_eq!(unescape("a\\\\\\\\b"), "a\\\\b");
}

#[test]
fn test_unescape_is_non_overlapping() {
    // "\\" collapses to "\", the remaining lone "\" escapes 'n'
    assert_eq!(unescape("\\\\\\n"), "\\n");
}

#[test]
fn test_unescape_drops_trailing_backslash() {
    assert_eq!(unescape("abc\\"), "abc");
    assert_eq!(unescape("\\\\\\"), "\\");
}

// =============================================================================
// Inverse Tests
// =============================================================================

#[test]
fn test_unescape_inverts_escape() {
    let samples = [
        "",
        "plain",
        "foo bar:baz= quux",
        "key with:several=escapes",
        "C:\\Program Files\\app",
        "tabs\tand\nnewlines\r",
        "trailing\\",
        "\\\\\\",
        "unicode ⌘ ⌥",
    ];

    for sample in samples {
        assert_eq!(unescape(&escape(sample)), sample, "sample: {:?}", sample);
    }
}
