//! Password hashing (bcrypt) and email lookup hashing (HMAC-SHA256)

use super::utils::constant_time_eq;
use crate::config::HashingConfig;
use crate::constants::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};
use edt_domain::error::{Error, Result};
use edt_domain::ports::HashingProvider;
use edt_domain::validation::normalize_email;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Check that a bcrypt work factor is within the supported range
pub fn validate_work_factor(cost: u32) -> Result<()> {
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
        return Err(Error::configuration(format!(
            "hashing.password_work_factor must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}, got {cost}"
        )));
    }
    Ok(())
}

/// Hashing service
///
/// Implements the `HashingProvider` port from edt-domain. The HMAC state is
/// keyed once at construction and cloned per call.
#[derive(Clone)]
pub struct HashingService {
    email_mac: HmacSha256,
    password_cost: u32,
}

impl HashingService {
    /// Create a hashing service from an HMAC secret and a bcrypt cost
    pub fn new(email_hmac_key: &str, password_work_factor: u32) -> Result<Self> {
        if email_hmac_key.trim().is_empty() {
            return Err(Error::configuration(
                "hashing.email_hmac_key must be provided in configuration",
            ));
        }
        validate_work_factor(password_work_factor)?;

        let email_mac = <HmacSha256 as Mac>::new_from_slice(email_hmac_key.as_bytes())
            .map_err(|e| Error::configuration(format!("HMAC initialization failed: {e}")))?;

        Ok(Self {
            email_mac,
            password_cost: password_work_factor,
        })
    }

    /// Create a hashing service from configuration
    pub fn from_config(config: &HashingConfig) -> Result<Self> {
        Self::new(&config.email_hmac_key, config.password_work_factor)
    }

    /// Configured bcrypt cost
    pub fn password_cost(&self) -> u32 {
        self.password_cost
    }
}

impl std::fmt::Debug for HashingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashingService")
            .field("email_hmac_key", &"<redacted>")
            .field("password_cost", &self.password_cost)
            .finish()
    }
}

impl HashingProvider for HashingService {
    fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.password_cost)
            .map_err(|e| Error::hashing_with_source("Password hashing failed", e))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| Error::hashing_with_source("Invalid password hash format", e))
    }

    fn hash_email(&self, email: &str) -> String {
        let normalized = normalize_email(email);
        let mut mac = self.email_mac.clone();
        mac.update(normalized.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn verify_email(&self, email: &str, hash: &str) -> bool {
        let computed = self.hash_email(email);
        constant_time_eq(computed.as_bytes(), hash.as_bytes())
    }
}
