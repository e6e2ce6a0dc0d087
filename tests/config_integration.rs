//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperview::config::AppConfig;
use hyperview_core::{ProjectionMode, ShapeKind};
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HV_SCENE__SHAPE", "duocylinder");
    std::env::set_var("HV_CANVAS__WIDTH", "1024");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("HV_SCENE__SHAPE");
    std::env::remove_var("HV_CANVAS__WIDTH");

    assert_eq!(config.scene.shape, ShapeKind::Duocylinder);
    assert_eq!(config.canvas.width, 1024);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("HV_SCENE__SHAPE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.scene.projection, ProjectionMode::Orthogonal);
    assert_eq!(config.scene.quality, 20);
    assert_eq!(config.input.regenerate_debounce_ms, 300);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.scene.shape, ShapeKind::Tesseract);
    assert_eq!(config.animation.frame_rate, 60.0);
}

#[test]
#[serial]
fn test_invalid_env_value_is_an_error() {
    std::env::set_var("HV_SCENE__PROJECTION", "isometric");
    let result = AppConfig::load();
    std::env::remove_var("HV_SCENE__PROJECTION");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
