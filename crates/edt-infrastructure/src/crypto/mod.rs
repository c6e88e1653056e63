//! Cryptographic services module
//!
//! This module provides the cryptographic primitives behind the domain ports:
//! - AES-256-CBC encryption of sensitive payloads (`IV || ciphertext`)
//! - bcrypt password hashing
//! - HMAC-SHA256 email lookup hashing with constant-time verification

mod encryption;
mod hashing;
mod utils;

pub use encryption::{AesDataEncryptionService, decode_key};
pub use hashing::{HashingService, validate_work_factor};
pub use utils::{constant_time_eq, random_bytes};
