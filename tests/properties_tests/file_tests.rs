//! File Tests
//!
//! Tests verify:
//! - load/save round trips through the filesystem
//! - Missing files surface as I/O errors

use std::fs;

use dotprops::{Config, Properties, PropsError};
use tempfile::TempDir;

#[test]
fn test_load_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.properties");
    fs::write(&path, "# app\nname = demo\n").unwrap();

    let props = Properties::load(&path).unwrap();
    assert_eq!(props.get("name").unwrap().as_deref(), Some("demo"));
    assert_eq!(props.entry_count(), 3);
}

#[test]
fn test_save_then_load_preserves_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.properties");
    let text = "# app\nname   :   demo\n\nport=8080\n";
    fs::write(&path, text).unwrap();

    let mut props = Properties::load(&path).unwrap();
    props.set("port", "9090");
    props.save(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# app\nname   :   demo\n\nport=9090\n"
    );
}

#[test]
fn test_load_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.properties");
    fs::write(&path, "a=1\nb=${a}").unwrap();

    let config = Config::builder()
        .auto_expand(false)
        .default_delimiter(": ")
        .build();
    let mut props = Properties::load_with_config(&path, config).unwrap();

    assert_eq!(props.get("b").unwrap().as_deref(), Some("${a}"));
    props.set("c", "3");
    assert_eq!(props.to_lines().last().unwrap(), "c: 3");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Properties::load(temp_dir.path().join("absent.properties"));
    assert!(matches!(result, Err(PropsError::Io(_))));
}
