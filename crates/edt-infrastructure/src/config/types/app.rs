//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::security::{DataEncryptionConfig, HashingConfig};

/// Root configuration
///
/// | Section | Source key |
/// |---------|------------|
/// | `logging` | `[logging]` / `EDT__LOGGING__*` |
/// | `hashing` | `[hashing]` / `EDT__HASHING__*` |
/// | `data_encryption` | `[data_encryption]` / `EDT__DATA_ENCRYPTION__*` |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Password and lookup hashing configuration
    #[serde(default)]
    pub hashing: HashingConfig,

    /// Sensitive payload encryption configuration
    #[serde(default)]
    pub data_encryption: DataEncryptionConfig,
}
