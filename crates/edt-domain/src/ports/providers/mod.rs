//! Provider Ports
//!
//! Interfaces implemented by infrastructure providers.

/// Cryptographic provider ports
pub mod crypto;

pub use crypto::{DataEncryptionProvider, HashingProvider};
