//! Sensitive payload codec
//!
//! `seal` is JSON serialization followed by encryption, `open` the reverse.
//! The entity-level helpers keep the blob and the plaintext cache in step.

use edt_domain::entities::{SensitiveData, SensitiveEntity};
use edt_domain::error::{Error, Result};
use edt_domain::ports::DataEncryptionProvider;

/// Serialize and encrypt a payload into a blob
pub fn seal<T: SensitiveData>(data: &T, encryption: &dyn DataEncryptionProvider) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(data)?;
    encryption.encrypt_data(&json)
}

/// Decrypt and deserialize a blob
///
/// A blob that decrypts but does not parse is reported as
/// `Error::Decryption`: with CBC padding a foreign key can occasionally
/// produce bytes that pass the padding check.
pub fn open<T: SensitiveData>(blob: &[u8], encryption: &dyn DataEncryptionProvider) -> Result<T> {
    if blob.is_empty() {
        return Err(Error::invalid_state("no encrypted data to open"));
    }
    let json = encryption.decrypt_data(blob)?;
    serde_json::from_slice(&json)
        .map_err(|e| Error::decryption(format!("decrypted payload is not valid JSON: {e}")))
}

/// Encrypt `data` onto the entity and cache the plaintext
///
/// The entity refreshes its audit pair as part of the blob write.
pub fn protect<T, E>(entity: &mut E, data: T, encryption: &dyn DataEncryptionProvider) -> Result<()>
where
    T: SensitiveData,
    E: SensitiveEntity<T>,
{
    let blob = seal(&data, encryption)?;
    entity.set_encrypted_data(blob)?;
    entity.set_sensitive_data(data)
}

/// Decrypt the entity's blob into its plaintext cache
pub fn reveal<T, E>(entity: &mut E, encryption: &dyn DataEncryptionProvider) -> Result<()>
where
    T: SensitiveData,
    E: SensitiveEntity<T>,
{
    let data: T = open(entity.encrypted_data(), encryption)?;
    entity.set_sensitive_data(data)
}
