//! Sensitive payload shapes
//!
//! These are serialized to JSON, encrypted, and stored only as ciphertext.
//! `Debug` is implemented by hand so payloads never show up in logs.

use crate::entities::SensitiveData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Personal data of a user, stored encrypted on the `User` entity
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSensitive {
    /// Given name
    pub first_name: String,
    /// Middle name (may be empty)
    pub middle_name: String,
    /// Family name
    pub last_name: String,
    /// Email address as entered by the user
    pub email: String,
}

impl UserSensitive {
    /// Full display name, skipping an empty middle name
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SensitiveData for UserSensitive {}

impl fmt::Debug for UserSensitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSensitive")
            .field("first_name", &"<redacted>")
            .field("middle_name", &"<redacted>")
            .field("last_name", &"<redacted>")
            .field("email", &"<redacted>")
            .finish()
    }
}
