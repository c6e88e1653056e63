//! Domain layer constants
//!
//! Contains constants that are part of the domain rules. Cryptographic
//! parameters (key sizes, cost bounds) live in `edt_infrastructure::constants`.

// ============================================================================
// LOOKUP HASH CONSTANTS
// ============================================================================

/// Length of an email lookup hash (HMAC-SHA256 rendered as lowercase hex)
pub const LOOKUP_HASH_HEX_LEN: usize = 64;

// ============================================================================
// ENTITY FIELD NAMES
// ============================================================================

/// Field name reported by user name validation errors
pub const FIELD_USER_NAME: &str = "user_name";

/// Field name reported by email hash validation errors
pub const FIELD_EMAIL_HASH: &str = "email_hash";

/// Field name reported by password hash validation errors
pub const FIELD_PASSWORD_HASH: &str = "password_hash";

/// Field name reported by encrypted blob validation errors
pub const FIELD_ENCRYPTED_DATA: &str = "encrypted_data";

// ============================================================================
// REQUEST FIELD NAMES
// ============================================================================

/// Field name reported by plaintext email validation errors
pub const FIELD_EMAIL: &str = "email";

/// Field name reported by plaintext password validation errors
pub const FIELD_PASSWORD: &str = "password";

/// Field name reported when the current password does not verify
pub const FIELD_CURRENT_PASSWORD: &str = "current_password";
