//! Domain Port Interfaces
//!
//! | Port | Description |
//! |------|-------------|
//! | [`HashingProvider`] | Password hashing and email lookup hashing |
//! | [`DataEncryptionProvider`] | Encryption of sensitive payloads |

/// Provider ports
pub mod providers;

pub use providers::{DataEncryptionProvider, HashingProvider};
