//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`User`] | Account whose personal data is stored only encrypted |
//! | [`AuditableDataHandler`] | Created/updated timestamp pair owned by an entity |
//! | [`SensitiveDataHandler`] | Encrypted blob plus optional decrypted payload |

/// Audit timestamp handling
pub mod audit;
/// Sensitive data handling
pub mod sensitive;
/// User entity
pub mod user;

pub use audit::{Auditable, AuditableDataHandler};
pub use sensitive::{SensitiveData, SensitiveDataHandler, SensitiveEntity, SensitiveState};
pub use user::{User, UserRecord};
