//! # Infrastructure Layer
//!
//! Cryptographic services and cross-cutting technical concerns for EduTracker.
//!
//! ## Module Categories
//!
//! ### Security
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | AES-256-CBC payload encryption, bcrypt password hashing, HMAC email lookup hashing |
//! | [`bootstrap`] | Builds the security services from configuration |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) with fail-fast validation |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context extension for foreign errors |
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | In-memory user repository |

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{SecurityContext, init_security};
pub use error_ext::ErrorContext;
