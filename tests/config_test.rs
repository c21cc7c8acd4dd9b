//! Integration tests for Settings config loading.
//!
//! These tests only write temp directories; a developer's global config and
//! FAMTREE_* variables are not expected to be present.

use std::fs;

use tempfile::TempDir;

use famtree::config::{local_config_path, RenderStyle, Settings};

#[test]
fn given_no_config_files_when_load_then_returns_defaults() {
    let project = TempDir::new().unwrap();

    let settings = Settings::load(Some(project.path())).expect("load settings");

    assert_eq!(settings.extension, "txt");
    assert_eq!(settings.style, RenderStyle::Indent);
    assert_eq!(settings.query.first, "Bilbo");
    assert_eq!(settings.query.second, "Frodo");
}

#[test]
fn given_local_config_when_load_then_overrides_only_specified_fields() {
    // Arrange
    let project = TempDir::new().unwrap();
    fs::write(
        local_config_path(project.path()),
        r#"
data_dir = "trees"
style = "tree"

[query]
first = "Sam"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(project.path())).expect("load settings");

    // Assert
    assert_eq!(settings.data_dir.to_str(), Some("trees"));
    assert_eq!(settings.style, RenderStyle::Tree);
    assert_eq!(settings.query.first, "Sam");
    assert_eq!(settings.query.second, "Frodo", "unspecified field keeps default");
    assert_eq!(settings.extension, "txt");
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let project = TempDir::new().unwrap();
    fs::write(local_config_path(project.path()), "style = [unterminated").unwrap();

    let err = Settings::load(Some(project.path())).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"), "{err}");
}

#[test]
fn given_unknown_style_when_load_file_then_config_error() {
    let project = TempDir::new().unwrap();
    let path = project.path().join("custom.toml");
    fs::write(&path, "style = \"sideways\"\n").unwrap();

    assert!(Settings::load_file(&path).is_err());
}

#[test]
fn given_settings_when_serialized_then_loads_back_identically() {
    let project = TempDir::new().unwrap();
    let path = project.path().join("roundtrip.toml");
    let original = Settings {
        extension: "fam".into(),
        style: RenderStyle::Tree,
        ..Settings::default()
    };
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    let loaded = Settings::load_file(&path).unwrap();

    assert_eq!(loaded, original);
}
