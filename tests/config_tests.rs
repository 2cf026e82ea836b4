//! Tests for engine configuration files
//!
//! These tests verify:
//! - Saving and loading through a file
//! - Partial files fall back to defaults
//! - Unreadable and malformed files are reported

use kiauh::{ColorChoice, EngineConfig, MenuError};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    let config = EngineConfig {
        color: ColorChoice::Never,
        clear_screen: true,
        max_depth: 8,
        farewell: "See you".to_string(),
        default_prompt: "Choose".to_string(),
        log_file: Some(PathBuf::from("/tmp/kiauh.log")),
    };

    config.save_to_file(&path).unwrap();
    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{ "max_depth": 4 }"#).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.max_depth, 4);
    assert_eq!(loaded.color, ColorChoice::Auto);
    assert_eq!(loaded.farewell, EngineConfig::default().farewell);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempdir().unwrap();
    let err = EngineConfig::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MenuError::Config(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, "{ max_depth: ").unwrap();

    let err = EngineConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, MenuError::Json(_)));
}

#[test]
fn test_invalid_values_load_but_fail_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{ "max_depth": 0 }"#).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert!(matches!(loaded.validate(), Err(MenuError::Config(_))));
}

#[test]
fn test_unknown_color_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{ "color": "sometimes" }"#).unwrap();

    assert!(EngineConfig::load_from_file(&path).is_err());
}
