//! Security configuration types
//!
//! Both sections carry secrets. Their `Debug` output is redacted so a config
//! dump never prints key material.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hashing configuration (`[hashing]`)
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Secret key for the email lookup HMAC
    ///
    /// **REQUIRED**. Configure via `EDT__HASHING__EMAIL_HMAC_KEY` environment
    /// variable or `hashing.email_hmac_key` in the config file.
    pub email_hmac_key: String,

    /// bcrypt cost factor for password hashing
    pub password_work_factor: u32,
}

/// Returns default hashing configuration with:
/// - Empty HMAC key (MUST be configured)
/// - bcrypt cost from infrastructure constants
impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            email_hmac_key: String::new(),
            password_work_factor: BCRYPT_DEFAULT_COST,
        }
    }
}

impl fmt::Debug for HashingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashingConfig")
            .field("email_hmac_key", &redact(&self.email_hmac_key))
            .field("password_work_factor", &self.password_work_factor)
            .finish()
    }
}

/// Data encryption configuration (`[data_encryption]`)
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataEncryptionConfig {
    /// Base64-encoded AES-256 key (32 bytes once decoded)
    ///
    /// **REQUIRED**. Configure via `EDT__DATA_ENCRYPTION__KEY` environment
    /// variable or `data_encryption.key` in the config file.
    pub key: String,
}

impl fmt::Debug for DataEncryptionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataEncryptionConfig")
            .field("key", &redact(&self.key))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}
