//! User factory
//!
//! Builds a new [`User`] with its personal data already encrypted.

use crate::codec::protect;
use edt_domain::entities::User;
use edt_domain::error::Result;
use edt_domain::ports::DataEncryptionProvider;
use edt_domain::value_objects::UserSensitive;

/// Assembles new users
pub struct UserFactory;

impl UserFactory {
    /// Create a user from pre-computed hashes and a plaintext payload
    ///
    /// The returned user is in the decrypted-and-encrypted state, so it can
    /// be rendered without a second decryption.
    pub fn create(
        user_name: &str,
        email_hash: &str,
        password_hash: &str,
        sensitive: UserSensitive,
        encryption: &dyn DataEncryptionProvider,
    ) -> Result<User> {
        let mut user = User::new(user_name, email_hash, password_hash)?;
        protect(&mut user, sensitive, encryption)?;
        Ok(user)
    }
}
