//! # Domain Layer
//!
//! Core types for EduTracker's sensitive-data protection: entities that keep
//! personal data encrypted at rest, the handlers they are built from, and the
//! ports the cryptographic services implement.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`entities`] | `User` and the audit / sensitive-data handlers it composes |
//! | [`value_objects`] | Roles and sensitive payload shapes |
//! | [`ports`] | Hashing and data-encryption provider interfaces |
//! | [`repositories`] | User persistence interface |
//! | [`validation`] | Boundary validation helpers |
//! | [`constants`] | Domain constants |
//! | [`error`] | Domain error types |
//!
//! The domain has no cryptography dependency. Decryption always happens in a
//! [`ports::DataEncryptionProvider`] and the result is pushed into an entity.
//!
//! ## Example
//!
//! ```ignore
//! use edt_domain::{entities::User, value_objects::UserSensitive};
//!
//! let mut user = User::new("jdoe", &email_hash, &password_hash)?;
//! user.set_encrypted_data(encryption.encrypt_data(&payload_bytes)?)?;
//! ```

/// Domain-level constants
pub mod constants;
/// Entities and the data handlers they compose
pub mod entities;
/// Domain error types
pub mod error;
/// Provider interfaces implemented by infrastructure
pub mod ports;
/// Repository interfaces
pub mod repositories;
/// Boundary validation helpers
pub mod validation;
/// Immutable value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use constants::*;
pub use entities::*;
pub use error::{Error, Result};
pub use ports::*;
pub use repositories::*;
pub use value_objects::*;
