//! Integration tests for Settings layered loading.
//!
//! These tests run without a global config and without CORONA_* variables,
//! so they exercise defaults plus the explicit config file layer.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use corona::application::ApplicationError;
use corona::config::Settings;

#[test]
fn given_no_config_file_when_load_then_defaults() {
    let settings = Settings::load(None).expect("load settings");

    assert_eq!(settings.top_count, 10);
    assert!(settings.color);
    assert_eq!(settings.data_file, None);
}

#[test]
fn given_config_file_when_load_then_overrides_specified_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corona.toml");
    fs::write(
        &path,
        r#"
data_file = "/srv/corona/reports.json"
top_count = 5
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.data_file, Some(PathBuf::from("/srv/corona/reports.json")));
    assert_eq!(settings.top_count, 5);
    assert!(settings.color, "unspecified fields keep their defaults");
    assert_eq!(settings.series_file, None);
}

#[test]
fn given_tilde_path_when_load_then_expanded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corona.toml");
    fs::write(&path, "series_file = \"~/corona/series.json\"\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    let series = settings.series_file.unwrap();
    assert!(!series.to_string_lossy().starts_with('~'));
    assert!(series.ends_with("corona/series.json"));
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corona.toml");
    fs::write(&path, "top_count = \"many\"\n").unwrap();

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let result = Settings::load(Some(&PathBuf::from("/nonexistent/corona.toml")));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_settings_when_rendered_then_toml_round_trips() {
    let settings = Settings {
        data_file: Some(PathBuf::from("/data/reports.json")),
        ..Settings::default()
    };

    let rendered = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, settings);
}
