//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `edt_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "edt.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "edt";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "EDT";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// PASSWORD HASHING CONSTANTS
// ============================================================================

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = 12;

/// Lowest bcrypt cost accepted
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest bcrypt cost accepted
pub const BCRYPT_MAX_COST: u32 = 31;

// ============================================================================
// CRYPTO CONSTANTS
// ============================================================================

/// AES-256 key size in bytes
pub const AES_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes (one block)
pub const AES_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Length of generated HMAC secrets in bytes
pub const HMAC_SECRET_SIZE: usize = 32;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "EDT_LOG";

/// Log file name prefix when no file stem is configured
pub const LOG_FILE_PREFIX: &str = "edt";
