//! Unit tests for domain error types

use edt_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("user");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "user"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_validation_error_names_field() {
    let error = Error::validation("user_name", "cannot be empty");
    match &error {
        Error::Validation { field, message } => {
            assert_eq!(field, "user_name");
            assert_eq!(message, "cannot be empty");
        }
        _ => panic!("Expected Validation error"),
    }
    assert!(error.to_string().contains("user_name"));
}

#[test]
fn test_decryption_error_display() {
    let error = Error::decryption("padding check failed");
    assert_eq!(
        error.to_string(),
        "Cannot decrypt sensitive data: padding check failed"
    );
}

#[test]
fn test_configuration_error_is_configuration() {
    assert!(Error::configuration("missing key").is_configuration());
    assert!(!Error::decryption("bad blob").is_configuration());
    assert!(!Error::hashing("bad hash").is_configuration());
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_hashing_error_keeps_source() {
    use std::error::Error as _;

    let io = std::io::Error::other("boom");
    let error = Error::hashing_with_source("bcrypt failed", io);
    assert!(error.source().is_some());
}

#[test]
fn test_conflict_error_names_resource() {
    let error = Error::conflict("user 42");
    assert!(matches!(&error, Error::Conflict { resource } if resource == "user 42"));
    assert_eq!(error.to_string(), "Conflict: user 42 was modified concurrently");
    assert!(!error.is_configuration());
}
