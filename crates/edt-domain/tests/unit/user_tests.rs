//! Tests for the User entity composition rules

use chrono::{Duration, Utc};
use edt_domain::{
    Auditable, Error, SensitiveEntity, SensitiveState, SystemRole, User, UserRecord,
    UserSensitive,
};
use uuid::Uuid;

const EMAIL_HASH: &str = "5f1d7a3c0b9e4f2a8d6c1b0e9f7a3d5c2b4e6f8a0c1d3e5f7a9b2c4d6e8f0a1b";
const PASSWORD_HASH: &str = "$2b$04$abcdefghijklmnopqrstuuJ1lq0Hq7o1nN8kX2sR5eVbW3yZ4aBcD";

fn sensitive() -> UserSensitive {
    UserSensitive {
        first_name: "Ada".to_string(),
        middle_name: String::new(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
    }
}

/// A user whose timestamps lie an hour in the past, so every audit refresh is observable
fn aged_user() -> User {
    let an_hour_ago = Utc::now() - Duration::hours(1);
    User::from_record(UserRecord {
        id: Uuid::now_v7(),
        user_name: "ada".to_string(),
        email_hash: EMAIL_HASH.to_string(),
        password_hash: PASSWORD_HASH.to_string(),
        role: SystemRole::User,
        encrypted_data: vec![0xAB; 32],
        created_at: an_hour_ago,
        updated_at: an_hour_ago,
        version: 3,
    })
    .unwrap()
}

#[test]
fn test_new_user_trims_and_defaults() {
    let user = User::new("  ada  ", EMAIL_HASH, PASSWORD_HASH).unwrap();
    assert_eq!(user.user_name(), "ada");
    assert_eq!(user.email_hash(), EMAIL_HASH);
    assert_eq!(user.role(), SystemRole::User);
    assert_eq!(user.created_at(), user.updated_at());
    assert_eq!(user.sensitive_state(), SensitiveState::Empty);
    assert!(user.encrypted_data().is_empty());
}

#[test]
fn test_new_user_rejects_blank_identity_fields() {
    let cases = [
        ("", EMAIL_HASH, PASSWORD_HASH, "user_name"),
        ("ada", "  ", PASSWORD_HASH, "email_hash"),
        ("ada", EMAIL_HASH, "\t", "password_hash"),
    ];
    for (name, email_hash, password_hash, expected_field) in cases {
        match User::new(name, email_hash, password_hash) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected Validation error for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn test_user_ids_are_unique() {
    let a = User::new("a", EMAIL_HASH, PASSWORD_HASH).unwrap();
    let b = User::new("b", EMAIL_HASH, PASSWORD_HASH).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_every_durable_mutation_updates_audit() {
    let mut user = aged_user();
    let created = user.created_at();

    let before = user.updated_at();
    user.set_role(SystemRole::Admin);
    assert!(user.updated_at() > before);
    assert_eq!(user.role(), SystemRole::Admin);

    let mut user = aged_user();
    let before = user.updated_at();
    user.update_user_name("countess").unwrap();
    assert!(user.updated_at() > before);

    let mut user = aged_user();
    let before = user.updated_at();
    user.update_email_hash("ffff").unwrap();
    assert!(user.updated_at() > before);

    let mut user = aged_user();
    let before = user.updated_at();
    user.update_password_hash("$2b$04$other").unwrap();
    assert!(user.updated_at() > before);

    let mut user = aged_user();
    let before = user.updated_at();
    user.set_encrypted_data(vec![1, 2, 3]).unwrap();
    assert!(user.updated_at() > before);

    assert_eq!(user.created_at(), created);
}

#[test]
fn test_rejected_mutation_keeps_state_and_audit() {
    let mut user = aged_user();
    let before = user.updated_at();

    assert!(user.update_user_name("   ").is_err());
    assert_eq!(user.user_name(), "ada");
    assert_eq!(user.updated_at(), before);
}

#[test]
fn test_sensitive_data_does_not_touch_audit() {
    let mut user = aged_user();
    let before = user.updated_at();

    user.set_sensitive_data(sensitive()).unwrap();
    assert_eq!(user.sensitive_state(), SensitiveState::DecryptedAndEncrypted);
    assert_eq!(user.sensitive_data().unwrap().first_name, "Ada");

    user.clear_decrypted_data();
    assert_eq!(user.sensitive_state(), SensitiveState::EncryptedOnly);
    assert_eq!(user.updated_at(), before);
}

#[test]
fn test_record_round_trip_excludes_plaintext() {
    let mut user = aged_user();
    user.set_sensitive_data(sensitive()).unwrap();

    let record = user.to_record();
    let json = serde_json::to_string(&record).unwrap();
    assert!(!json.contains("Lovelace"));
    assert!(!json.contains("ada@example.com"));

    let restored = User::from_record(record.clone()).unwrap();
    assert_eq!(restored.id(), user.id());
    assert_eq!(restored.encrypted_data(), user.encrypted_data());
    assert_eq!(restored.created_at(), user.created_at());
    assert_eq!(restored.updated_at(), user.updated_at());
    assert_eq!(restored.version(), 3);
    assert!(restored.sensitive_data().is_none());
    assert_eq!(restored.to_record(), record);
}

#[test]
fn test_record_without_version_defaults_to_zero() {
    let mut value = serde_json::to_value(aged_user().to_record()).unwrap();
    value.as_object_mut().unwrap().remove("version");
    let record: UserRecord = serde_json::from_value(value).unwrap();
    assert_eq!(record.version, 0);
    assert_eq!(User::new("ada", EMAIL_HASH, PASSWORD_HASH).unwrap().version(), 0);
}

#[test]
fn test_same_email_hash_on_two_users() {
    let a = User::new("first", EMAIL_HASH, PASSWORD_HASH).unwrap();
    let b = User::new("second", EMAIL_HASH, PASSWORD_HASH).unwrap();
    assert_eq!(a.email_hash(), b.email_hash());
}

#[test]
fn test_user_debug_redacts_sensitive_payload() {
    let mut user = aged_user();
    user.set_sensitive_data(sensitive()).unwrap();
    let debug = format!("{user:?}");
    assert!(!debug.contains("Lovelace"));
    assert!(!debug.contains("ada@example.com"));
}

#[test]
fn test_full_name_skips_empty_middle_name() {
    assert_eq!(sensitive().full_name(), "Ada Lovelace");
}

#[test]
fn test_sensitive_payload_uses_camel_case_keys() {
    let json = serde_json::to_value(sensitive()).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["middleName"], "");
    assert_eq!(json["email"], "ada@example.com");
}
