//! Boundary validation helpers
//!
//! Entities call these in their constructors and mutators so that invalid
//! identity values are rejected before they reach persistence.

use crate::error::{Error, Result};

/// Reject empty or whitespace-only values and return the trimmed value
pub fn ensure_not_empty_and_trim(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Normalize an email address for lookup hashing (trimmed, lower-cased)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
