//! Integration tests for Settings layered loading.
//!
//! Layers: defaults → global file → explicit file → NODETREE_* env vars.
//! Environment overrides live in config_env_test.rs (own process, no races).

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use nodetree::application::{ApplicationError, RenderStyle};
use nodetree::config::Settings;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_no_config_files_when_load_then_defaults() {
    let settings = Settings::load_layers(None, None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_global_file_when_load_then_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nodetree.toml");
    let settings = Settings::load_layers(Some(missing.as_path()), None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_load_then_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let global = write(&dir, "nodetree.toml", "style = \"tree\"\nindent = 4\n");

    let settings = Settings::load_layers(Some(global.as_path()), None).expect("load settings");

    assert_eq!(settings.style, RenderStyle::Tree);
    assert_eq!(settings.indent, 4);
    assert!(settings.color, "unspecified color keeps default");
}

#[test]
fn given_global_and_explicit_files_when_load_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write(&dir, "global.toml", "style = \"tree\"\nindent = 4\n");
    let local = write(&dir, "local.toml", "style = \"ls\"\ncolor = false\n");

    let settings = Settings::load_layers(Some(global.as_path()), Some(local.as_path()))
        .expect("load settings");

    assert_eq!(settings.style, RenderStyle::Ls);
    assert_eq!(settings.indent, 4, "indent inherited from global");
    assert!(!settings.color);
}

#[test]
fn given_missing_explicit_file_when_load_then_error_names_path() {
    let err = Settings::load_layers(None, Some(Path::new("/nonexistent/nodetree.toml")))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("/nonexistent/nodetree.toml"));
}

#[test]
fn given_unknown_key_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = write(&dir, "local.toml", "colour = true\n");
    let err = Settings::load_layers(None, Some(local.as_path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }), "{:?}", err);
}

#[test]
fn given_unknown_style_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = write(&dir, "local.toml", "style = \"fancy\"\n");
    let err = Settings::load_layers(None, Some(local.as_path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }), "{:?}", err);
}

#[test]
fn given_mixed_case_style_in_file_when_load_then_parsed_like_env() {
    let dir = TempDir::new().unwrap();
    let local = write(&dir, "local.toml", "style = \"Tree\"\n");
    let settings = Settings::load_layers(None, Some(local.as_path())).expect("load settings");
    assert_eq!(settings.style, RenderStyle::Tree);
}
