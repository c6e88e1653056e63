//! Cryptographic Provider Ports
//!
//! Defines the interfaces for the two cryptographic services the entities
//! depend on without linking any cryptography code into the domain.
//!
//! ## Usage
//!
//! This port follows the Dependency Inversion Principle:
//! - The traits are defined here (edt-domain)
//! - Implementations live in edt-infrastructure (`HashingService`,
//!   `AesDataEncryptionService`)
//! - Use cases depend on the abstraction, not the concrete implementation
//!
//! All operations are synchronous and CPU-bound. Implementations hold
//! immutable key material only, so they are safe to share across threads.

use crate::error::Result;

/// Password hashing and email lookup hashing
///
/// # Example
///
/// ```ignore
/// use edt_domain::ports::HashingProvider;
///
/// fn email_taken(hashing: &dyn HashingProvider, email: &str) -> String {
///     hashing.hash_email(email)
/// }
/// ```
pub trait HashingProvider: Send + Sync {
    /// Produce a self-contained, randomly salted password hash
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Check a password against a stored hash
    ///
    /// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;

    /// Deterministic keyed lookup hash of a normalized email, as lowercase hex
    fn hash_email(&self, email: &str) -> String;

    /// Recompute the lookup hash and compare it in constant time
    fn verify_email(&self, email: &str, hash: &str) -> bool;
}

/// Symmetric encryption of sensitive payloads
pub trait DataEncryptionProvider: Send + Sync {
    /// Encrypt a payload into an opaque `IV || ciphertext` blob
    ///
    /// Two calls on the same plaintext return different blobs.
    fn encrypt_data(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Recover the plaintext from an `IV || ciphertext` blob
    ///
    /// Truncated, tampered, or foreign-key blobs fail with `Error::Decryption`.
    fn decrypt_data(&self, blob: &[u8]) -> Result<Vec<u8>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
