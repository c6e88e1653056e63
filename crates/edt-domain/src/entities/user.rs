//! User entity
//!
//! A user's personal data (names, email) lives only in the encrypted blob.
//! The email is additionally represented by a keyed lookup hash so that
//! uniqueness checks never need plaintext.

use super::audit::{Auditable, AuditableDataHandler};
use super::sensitive::{SensitiveDataHandler, SensitiveEntity, SensitiveState};
use crate::constants::{FIELD_EMAIL_HASH, FIELD_PASSWORD_HASH, FIELD_USER_NAME};
use crate::error::Result;
use crate::validation::ensure_not_empty_and_trim;
use crate::value_objects::{SystemRole, UserSensitive};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entity: User account
///
/// Every mutation of durable state refreshes `updated_at` in the same call.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    user_name: String,
    email_hash: String,
    password_hash: String,
    role: SystemRole,
    audit: AuditableDataHandler,
    sensitive: SensitiveDataHandler<UserSensitive>,
    version: u64,
}

impl User {
    /// Create a user from already-normalized, already-hashed values
    ///
    /// Empty or whitespace-only values are rejected; the stored values are
    /// trimmed.
    pub fn new(user_name: &str, email_hash: &str, password_hash: &str) -> Result<Self> {
        Ok(Self {
            id: Uuid::now_v7(),
            user_name: ensure_not_empty_and_trim(FIELD_USER_NAME, user_name)?,
            email_hash: ensure_not_empty_and_trim(FIELD_EMAIL_HASH, email_hash)?,
            password_hash: ensure_not_empty_and_trim(FIELD_PASSWORD_HASH, password_hash)?,
            role: SystemRole::default(),
            audit: AuditableDataHandler::new(),
            sensitive: SensitiveDataHandler::new(),
            version: 0,
        })
    }

    /// Rebuild a user from its persisted form
    pub fn from_record(record: UserRecord) -> Result<Self> {
        let mut sensitive = SensitiveDataHandler::new();
        if !record.encrypted_data.is_empty() {
            sensitive.set_encrypted_data(record.encrypted_data, None)?;
        }
        Ok(Self {
            id: record.id,
            user_name: ensure_not_empty_and_trim(FIELD_USER_NAME, &record.user_name)?,
            email_hash: ensure_not_empty_and_trim(FIELD_EMAIL_HASH, &record.email_hash)?,
            password_hash: ensure_not_empty_and_trim(FIELD_PASSWORD_HASH, &record.password_hash)?,
            role: record.role,
            audit: AuditableDataHandler::restore(record.created_at, record.updated_at)?,
            sensitive,
            version: record.version,
        })
    }

    /// Persisted form of this user; the decrypted payload is not part of it
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: self.id,
            user_name: self.user_name.clone(),
            email_hash: self.email_hash.clone(),
            password_hash: self.password_hash.clone(),
            role: self.role,
            encrypted_data: self.sensitive.encrypted_data().to_vec(),
            created_at: self.audit.created_at(),
            updated_at: self.audit.updated_at(),
            version: self.version,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn email_hash(&self) -> &str {
        &self.email_hash
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> SystemRole {
        self.role
    }

    /// Stored row version this user was loaded at (0 if never persisted)
    ///
    /// Repositories compare it against the stored version on update and
    /// reject stale writes.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Lifecycle state of the sensitive data
    pub fn sensitive_state(&self) -> SensitiveState {
        self.sensitive.state()
    }

    /// Change the system role
    pub fn set_role(&mut self, role: SystemRole) {
        self.role = role;
        self.audit.update_audit();
    }

    /// Change the user name
    pub fn update_user_name(&mut self, user_name: &str) -> Result<()> {
        self.user_name = ensure_not_empty_and_trim(FIELD_USER_NAME, user_name)?;
        self.audit.update_audit();
        Ok(())
    }

    /// Replace the email lookup hash (computed by the hashing service)
    pub fn update_email_hash(&mut self, email_hash: &str) -> Result<()> {
        self.email_hash = ensure_not_empty_and_trim(FIELD_EMAIL_HASH, email_hash)?;
        self.audit.update_audit();
        Ok(())
    }

    /// Replace the password hash (computed by the hashing service)
    pub fn update_password_hash(&mut self, password_hash: &str) -> Result<()> {
        self.password_hash = ensure_not_empty_and_trim(FIELD_PASSWORD_HASH, password_hash)?;
        self.audit.update_audit();
        Ok(())
    }
}

impl Auditable for User {
    fn created_at(&self) -> DateTime<Utc> {
        self.audit.created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.audit.updated_at()
    }

    fn update_audit(&mut self) {
        self.audit.update_audit();
    }
}

impl SensitiveEntity<UserSensitive> for User {
    fn encrypted_data(&self) -> &[u8] {
        self.sensitive.encrypted_data()
    }

    fn sensitive_data(&self) -> Option<&UserSensitive> {
        self.sensitive.sensitive_data()
    }

    fn set_sensitive_data(&mut self, data: UserSensitive) -> Result<()> {
        self.sensitive.set_sensitive_data(data)
    }

    fn set_encrypted_data(&mut self, data: Vec<u8>) -> Result<()> {
        self.sensitive.set_encrypted_data(data, Some(&mut self.audit))
    }

    fn clear_decrypted_data(&mut self) {
        self.sensitive.clear_decrypted_data();
    }

    fn clear_encrypted_data(&mut self) {
        self.sensitive.clear_encrypted_data();
    }
}

/// Persisted shape of a [`User`]
///
/// Holds ciphertext only. There is no field for the decrypted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Primary key
    pub id: Uuid,
    /// Unique user name
    pub user_name: String,
    /// Email lookup hash (unique)
    pub email_hash: String,
    /// bcrypt password hash
    pub password_hash: String,
    /// System role
    pub role: SystemRole,
    /// `IV || ciphertext` of the serialized [`UserSensitive`]
    pub encrypted_data: Vec<u8>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Row version, bumped by the repository on every successful update
    #[serde(default)]
    pub version: u64,
}
