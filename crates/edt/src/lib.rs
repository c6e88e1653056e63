//! # EduTracker Sensitive-Data Core
//!
//! Facade over the workspace crates plus the operator CLI.
//!
//! ## Architecture
//!
//! - `domain` - entities, handlers, ports and the domain error
//! - `application` - user use cases over encrypted personal data
//! - `infrastructure` - crypto services, configuration, logging
//! - `cli` - operator commands (key generation, hashing, config check)

/// Domain layer - entities, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use edt_domain::*;
}

/// Application layer - use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use edt_application::*;
}

/// Infrastructure layer - crypto, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use edt_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;
