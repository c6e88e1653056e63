//! Sensitive data handling
//!
//! [`SensitiveDataHandler`] reconciles the encrypted-at-rest form of an
//! entity's personal data with its decrypted, typed form. The encrypted bytes
//! are the durable source of truth; the decrypted payload is a request-scoped
//! cache that is filled in from outside after a decrypt step.
//!
//! ```text
//!            set_encrypted_data             set_sensitive_data
//!   Empty ─────────────────────▶ EncryptedOnly ─────────────────▶ DecryptedAndEncrypted
//!     ▲                              │  ▲                                  │
//!     └──── clear_encrypted_data ────┘  └────── clear_decrypted_data ──────┘
//! ```

use super::audit::AuditableDataHandler;
use crate::constants::FIELD_ENCRYPTED_DATA;
use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Marker for payload types that are stored only in encrypted form
pub trait SensitiveData: Serialize + DeserializeOwned + Send + Sync {}

/// Lifecycle state of a [`SensitiveDataHandler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitiveState {
    /// No ciphertext and no payload
    Empty,
    /// Ciphertext only; the payload has not been decrypted in this request
    EncryptedOnly,
    /// Ciphertext plus its decrypted payload
    DecryptedAndEncrypted,
}

/// Entities that carry a [`SensitiveDataHandler`]
///
/// Nothing here decrypts. Callers run the encryption service themselves and
/// push the result in with `set_sensitive_data`.
pub trait SensitiveEntity<T: SensitiveData> {
    /// Ciphertext at rest (`IV || ciphertext`), empty when unset
    fn encrypted_data(&self) -> &[u8];

    /// Decrypted payload, if it was pushed in during this request
    fn sensitive_data(&self) -> Option<&T>;

    /// Cache a decrypted payload
    fn set_sensitive_data(&mut self, data: T) -> Result<()>;

    /// Replace the ciphertext (also refreshes the audit timestamp)
    fn set_encrypted_data(&mut self, data: Vec<u8>) -> Result<()>;

    /// Drop the decrypted payload
    fn clear_decrypted_data(&mut self);

    /// Drop the ciphertext (and with it any decrypted payload)
    fn clear_encrypted_data(&mut self);
}

/// Holder of an entity's encrypted blob and optional decrypted payload
#[derive(Clone, PartialEq, Eq)]
pub struct SensitiveDataHandler<T> {
    encrypted_data: Vec<u8>,
    sensitive_data: Option<T>,
}

impl<T: SensitiveData> SensitiveDataHandler<T> {
    /// Create an empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Ciphertext at rest, empty when unset
    pub fn encrypted_data(&self) -> &[u8] {
        &self.encrypted_data
    }

    /// Decrypted payload, if present
    pub fn sensitive_data(&self) -> Option<&T> {
        self.sensitive_data.as_ref()
    }

    /// Current lifecycle state
    pub fn state(&self) -> SensitiveState {
        match (self.encrypted_data.is_empty(), self.sensitive_data.is_some()) {
            (true, _) => SensitiveState::Empty,
            (false, false) => SensitiveState::EncryptedOnly,
            (false, true) => SensitiveState::DecryptedAndEncrypted,
        }
    }

    /// Replace the ciphertext
    ///
    /// Moves the handler to [`SensitiveState::EncryptedOnly`]. A cached payload
    /// is dropped because it no longer describes the new ciphertext. When an
    /// audit handler is given, its `updated_at` is refreshed together with the
    /// write.
    pub fn set_encrypted_data(
        &mut self,
        data: Vec<u8>,
        audit: Option<&mut AuditableDataHandler>,
    ) -> Result<()> {
        if data.is_empty() {
            return Err(Error::validation(
                FIELD_ENCRYPTED_DATA,
                "ciphertext cannot be empty",
            ));
        }
        self.encrypted_data = data;
        self.sensitive_data = None;
        if let Some(audit) = audit {
            audit.update_audit();
        }
        Ok(())
    }

    /// Cache a payload produced by an external decrypt step
    pub fn set_sensitive_data(&mut self, data: T) -> Result<()> {
        if self.encrypted_data.is_empty() {
            return Err(Error::invalid_state(
                "cannot attach decrypted data to a handler without ciphertext",
            ));
        }
        self.sensitive_data = Some(data);
        Ok(())
    }

    /// Drop the decrypted payload
    pub fn clear_decrypted_data(&mut self) {
        self.sensitive_data = None;
    }

    /// Drop the ciphertext and any decrypted payload
    pub fn clear_encrypted_data(&mut self) {
        self.sensitive_data = None;
        self.encrypted_data = Vec::new();
    }
}

impl<T> Default for SensitiveDataHandler<T> {
    fn default() -> Self {
        Self {
            encrypted_data: Vec::new(),
            sensitive_data: None,
        }
    }
}

impl<T> fmt::Debug for SensitiveDataHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensitiveDataHandler")
            .field("encrypted_len", &self.encrypted_data.len())
            .field("decrypted", &self.sensitive_data.is_some())
            .finish()
    }
}
