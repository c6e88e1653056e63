//! Application Layer - EduTracker
//!
//! Use cases that move personal data in and out of its encrypted form.
//!
//! ## Architecture
//!
//! The application layer:
//! - Serializes sensitive payloads and hands them to the encryption port
//! - Orchestrates hashing, repository lookups and entity mutations
//! - Has no dependencies on infrastructure; services arrive as `Arc<dyn Port>`
//!
//! ## Use Cases
//!
//! - User registration with lookup-hash uniqueness checks
//! - Profile read (decrypt) and update (re-encrypt)
//! - Password change and credential verification
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `edt-domain`: entities, ports and the domain error
//! - Pure Rust libraries for async, serialization, etc.

pub mod codec;
pub mod domain_services;
pub mod factory;
pub mod use_cases;

pub use codec::{open, protect, reveal, seal};
pub use domain_services::*;
pub use factory::UserFactory;
pub use use_cases::*;
