//! Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SystemRole`] | System-wide role of a user |
//! | [`UserSensitive`] | Personal data of a user, encrypted at rest |

/// System-wide user roles
pub mod role;
/// Sensitive payload shapes
pub mod sensitive;

pub use role::SystemRole;
pub use sensitive::UserSensitive;
