//! Configuration
//!
//! Layered configuration with Figment: defaults, then an optional TOML file,
//! then `EDT__`-prefixed environment variables. Loading fails fast when a
//! required secret is missing or malformed.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{AppConfig, DataEncryptionConfig, HashingConfig, LoggingConfig};
