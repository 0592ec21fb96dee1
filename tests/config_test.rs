//! Integration tests for loading the TOML config from disk.

use std::io::Write;
use strictly_ultimate_games::AppConfig;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_filter = \"strictly_ultimate=debug\"\n\n[rules]\nclosed_decided_boards = false\n\n[display]\nshow_spot_numbers = false"
    )
    .unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert!(!*config.rules().closed_decided_boards());
    assert!(!*config.display().show_spot_numbers());
    assert_eq!(config.log_filter().as_deref(), Some("strictly_ultimate=debug"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nx_symbol = \"too long\"").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
