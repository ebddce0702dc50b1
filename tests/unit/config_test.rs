//! Tests for configuration management

use std::fs;

use certview::config::{CardConfig, CertviewConfig, ConfigError, DEFAULT_PORT};
use certview::paths::CONFIG_ENV;
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = CertviewConfig::default();
    assert_eq!(config.card.brand, "SkillForge");
    assert_eq!(config.card.title, "Certificate of Achievement");
    assert_eq!(config.card.detail_base_path, "/dashboard/certificates/view");
    assert_eq!(config.ui.port, DEFAULT_PORT);
    assert_eq!(config.ui.theme, "light");
}

#[test]
fn test_partial_config_fills_defaults() {
    let config: CertviewConfig = toml::from_str("[card]\nbrand = \"Acme\"\n").unwrap();
    assert_eq!(config.card.brand, "Acme");
    assert_eq!(config.card.title, "Certificate of Achievement");
    assert_eq!(config.ui.port, DEFAULT_PORT);
}

#[test]
fn test_detail_path() {
    let card = CardConfig::default();
    assert_eq!(card.detail_path("abc123"), "/dashboard/certificates/view/abc123");
}

// =============================================================================
// PERSISTENCE
// =============================================================================

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = CertviewConfig::default();
    config.card.brand = "Acme Academy".to_string();
    config.ui.port = 9000;
    config.save_to(&path).unwrap();

    let loaded = CertviewConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_from_invalid_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[card\nbrand = 1").unwrap();

    let err = CertviewConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
#[serial]
fn test_load_uses_env_override() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[card]\ndetail_base_path = \"/certs\"\n").unwrap();

    // SAFETY: serialized with the other env tests
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let config = CertviewConfig::load();
    assert_eq!(CertviewConfig::config_path(), path);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(config.card.detail_base_path, "/certs");
}

#[test]
#[serial]
fn test_load_falls_back_on_bad_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "not = [valid").unwrap();

    // SAFETY: serialized with the other env tests
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let config = CertviewConfig::load();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(config, CertviewConfig::default());
}
