//! Configuration loader tests
//!
//! Each test points the loader at an explicit file and a prefix no real
//! environment defines, so ambient `EDT__*` variables cannot interfere.

use crate::test_keys::{HMAC_KEY, encryption_key_b64};
use edt_infrastructure::config::{ConfigBuilder, ConfigLoader, validate_app_config};
use edt_infrastructure::constants::{BCRYPT_DEFAULT_COST, DEFAULT_LOG_LEVEL};
use std::fs;
use tempfile::TempDir;

const ISOLATED_PREFIX: &str = "EDT_UNIT_TEST_UNUSED";

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("edt.toml");
    fs::write(&path, body).unwrap();
    path
}

fn loader(path: &std::path::Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(ISOLATED_PREFIX)
}

fn complete_toml() -> String {
    format!(
        r#"
[logging]
level = "debug"

[hashing]
email_hmac_key = "{HMAC_KEY}"
password_work_factor = 10

[data_encryption]
key = "{}"
"#,
        encryption_key_b64()
    )
}

#[test]
fn test_load_complete_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &complete_toml());

    let config = loader(&path).load().unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.hashing.email_hmac_key, HMAC_KEY);
    assert_eq!(config.hashing.password_work_factor, 10);
    assert_eq!(config.data_encryption.key, encryption_key_b64());
}

#[test]
fn test_work_factor_defaults_to_twelve() {
    let dir = TempDir::new().unwrap();
    let body = format!(
        "[hashing]\nemail_hmac_key = \"{HMAC_KEY}\"\n\n[data_encryption]\nkey = \"{}\"\n",
        encryption_key_b64()
    );
    let path = write_config(&dir, &body);

    let config = loader(&path).load().unwrap();
    assert_eq!(config.hashing.password_work_factor, BCRYPT_DEFAULT_COST);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_hmac_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    let body = format!("[data_encryption]\nkey = \"{}\"\n", encryption_key_b64());
    let path = write_config(&dir, &body);

    let err = loader(&path).load().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("email_hmac_key"));
}

#[test]
fn test_missing_encryption_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    let body = format!("[hashing]\nemail_hmac_key = \"{HMAC_KEY}\"\n");
    let path = write_config(&dir, &body);

    let err = loader(&path).load().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("data_encryption.key"));
}

#[test]
fn test_invalid_values_are_fatal() {
    let dir = TempDir::new().unwrap();
    let cases = [
        complete_toml().replace(&encryption_key_b64(), "AAAA"),
        complete_toml().replace(&encryption_key_b64(), "%%%not-base64%%%"),
        complete_toml().replace("password_work_factor = 10", "password_work_factor = 2"),
        complete_toml().replace("level = \"debug\"", "level = \"loud\""),
    ];
    for body in cases {
        let path = write_config(&dir, &body);
        let err = loader(&path).load().unwrap_err();
        assert!(err.is_configuration(), "unexpected error: {err}");
    }
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[hashing\nemail_hmac_key = ");
    assert!(loader(&path).load().unwrap_err().is_configuration());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let config = loader(&path).load_unvalidated().unwrap();
    assert!(config.hashing.email_hmac_key.is_empty());
    assert!(loader(&path).load().unwrap_err().is_configuration());
}

#[test]
fn test_explicit_path_is_resolved_even_when_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let resolved = loader(&path).resolved_config_path();
    assert_eq!(resolved.as_deref(), Some(path.as_path()));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_email_hmac_key(HMAC_KEY)
        .with_password_work_factor(6)
        .with_data_encryption_key(encryption_key_b64())
        .build_validated()
        .unwrap();
    ConfigLoader::new().save_to_file(&original, &path).unwrap();

    let loaded = loader(&path).load().unwrap();
    assert_eq!(loaded.hashing.password_work_factor, 6);
    assert_eq!(loaded.hashing.email_hmac_key, HMAC_KEY);
}

#[test]
fn test_save_to_unwritable_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("edt.toml");

    let err = ConfigLoader::new()
        .save_to_file(&ConfigBuilder::new().build(), &path)
        .unwrap_err();
    assert!(matches!(err, edt_domain::Error::Io { .. }));
}

#[test]
fn test_builder_defaults_fail_validation() {
    assert!(validate_app_config(&ConfigBuilder::new().build()).is_err());
    assert!(ConfigBuilder::new().build_validated().is_err());
}

#[test]
fn test_debug_redacts_secrets() {
    let config = ConfigBuilder::new()
        .with_email_hmac_key(HMAC_KEY)
        .with_data_encryption_key(encryption_key_b64())
        .build();
    let rendered = format!("{config:?}");

    assert!(!rendered.contains(HMAC_KEY));
    assert!(!rendered.contains(&encryption_key_b64()));
    assert!(rendered.contains("<redacted>"));
}
