//! Encryption/decryption service using AES-256-CBC
//!
//! Blob layout: `[16-byte IV][ciphertext]`. The IV is drawn fresh for every
//! call, so encrypting the same payload twice yields different blobs.

use super::utils::random_bytes;
use crate::config::DataEncryptionConfig;
use crate::constants::{AES_BLOCK_SIZE, AES_IV_SIZE, AES_KEY_SIZE};
use aes::Aes256;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use edt_domain::error::{Error, Result};
use edt_domain::ports::DataEncryptionProvider;
use tracing::{debug, warn};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Decode a base64 key and check it has the AES-256 length
pub fn decode_key(encoded: &str) -> Result<Vec<u8>> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(Error::configuration(
            "data_encryption.key must be provided in configuration",
        ));
    }

    let key = BASE64.decode(encoded).map_err(|e| {
        Error::configuration_with_source("data_encryption.key is not valid base64", e)
    })?;

    if key.len() != AES_KEY_SIZE {
        return Err(Error::configuration(format!(
            "Invalid data encryption key size: expected {} bytes, got {}",
            AES_KEY_SIZE,
            key.len()
        )));
    }
    Ok(key)
}

/// Sensitive payload encryption service
///
/// Implements the `DataEncryptionProvider` port from edt-domain. The key is
/// loaded once and never changes for the lifetime of the service.
#[derive(Clone)]
pub struct AesDataEncryptionService {
    key: Vec<u8>,
}

impl AesDataEncryptionService {
    /// Create a new encryption service from raw key bytes
    pub fn new(key: Vec<u8>) -> Result<Self> {
        if key.len() != AES_KEY_SIZE {
            return Err(Error::configuration(format!(
                "Invalid data encryption key size: expected {} bytes, got {}",
                AES_KEY_SIZE,
                key.len()
            )));
        }
        Ok(Self { key })
    }

    /// Create a new encryption service from a base64-encoded key
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Self::new(decode_key(encoded)?)
    }

    /// Create a new encryption service from configuration
    pub fn from_config(config: &DataEncryptionConfig) -> Result<Self> {
        Self::from_base64(&config.key)
    }

    /// Generate a random AES-256 key
    pub fn generate_key() -> Vec<u8> {
        random_bytes(AES_KEY_SIZE)
    }

    /// Generate a random AES-256 key, base64-encoded for configuration
    pub fn generate_key_base64() -> String {
        BASE64.encode(Self::generate_key())
    }

    /// Encrypt data, returning `IV || ciphertext`
    pub fn encrypt_data(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let iv = random_bytes(AES_IV_SIZE);
        let cipher = Aes256CbcEnc::new_from_slices(&self.key, &iv)
            .map_err(|e| Error::encryption(format!("Cipher initialization failed: {e}")))?;
        let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut blob = Vec::with_capacity(AES_IV_SIZE + ciphertext.len());
        blob.extend_from_slice(&iv);
        blob.extend_from_slice(&ciphertext);

        debug!(
            plaintext_len = plaintext.len(),
            blob_len = blob.len(),
            "Encrypted sensitive payload"
        );
        Ok(blob)
    }

    /// Decrypt an `IV || ciphertext` blob
    pub fn decrypt_data(&self, blob: &[u8]) -> Result<Vec<u8>> {
        if blob.len() < AES_IV_SIZE {
            warn!(blob_len = blob.len(), "Encrypted blob shorter than IV");
            return Err(Error::decryption(format!(
                "blob is {} bytes, shorter than the {}-byte IV",
                blob.len(),
                AES_IV_SIZE
            )));
        }

        let (iv, ciphertext) = blob.split_at(AES_IV_SIZE);
        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            warn!(blob_len = blob.len(), "Encrypted blob has a partial block");
            return Err(Error::decryption(format!(
                "ciphertext length {} is not a positive multiple of {}",
                ciphertext.len(),
                AES_BLOCK_SIZE
            )));
        }

        let cipher = Aes256CbcDec::new_from_slices(&self.key, iv)
            .map_err(|e| Error::decryption(format!("Cipher initialization failed: {e}")))?;

        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| {
                warn!(blob_len = blob.len(), "Padding validation failed");
                Error::decryption("padding validation failed (wrong key or corrupted data)")
            })
    }
}

impl std::fmt::Debug for AesDataEncryptionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesDataEncryptionService")
            .field("key", &"<redacted>")
            .finish()
    }
}

// Implement the DataEncryptionProvider port from edt-domain
impl DataEncryptionProvider for AesDataEncryptionService {
    fn encrypt_data(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        AesDataEncryptionService::encrypt_data(self, plaintext)
    }

    fn decrypt_data(&self, blob: &[u8]) -> Result<Vec<u8>> {
        AesDataEncryptionService::decrypt_data(self, blob)
    }

    fn provider_name(&self) -> &str {
        "aes-256-cbc"
    }
}
