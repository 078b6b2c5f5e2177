mod common;

use std::path::PathBuf;

use elmtui::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn defaults_are_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.counter.initial_count, 10);
    assert_eq!(config.finder.target_name, "peter");
    assert_eq!(config.finder.debounce_ms, 250);
}

#[test]
fn load_from_parses_a_full_file() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 100

[counter]
initial_count = 0

[finder]
target_name = "lara"
debounce_ms = 500
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.counter.initial_count, 0);
    assert_eq!(config.finder.target_name, "lara");
    assert_eq!(config.finder.debounce_ms, 500);
}

#[test]
fn load_from_fills_missing_sections_with_defaults() {
    let (_dir, path) = write_config(
        r#"
[finder]
target_name = "lara"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.finder.target_name, "lara");
    assert_eq!(config.finder.debounce_ms, 250);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.counter.initial_count, 10);
}

#[test]
fn load_from_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn load_from_rejects_invalid_toml() {
    let (_dir, path) = write_config("this is not toml = = =");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn load_from_rejects_an_empty_target_name() {
    let (_dir, path) = write_config(
        r#"
[finder]
target_name = "  "
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn load_from_rejects_a_zero_tick_rate() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn config_path_ends_with_the_app_directory() {
    let path = Config::config_path();
    assert!(path.ends_with("elmtui/config.toml"));
}
