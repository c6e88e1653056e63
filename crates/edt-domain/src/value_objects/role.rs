//! System-wide user roles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user across the whole system (not per school)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SystemRole {
    /// Regular account
    #[default]
    User,
    /// School administrator
    Admin,
    /// Platform operator
    SuperAdmin,
}

impl SystemRole {
    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
