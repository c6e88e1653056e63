//! Use Cases - Application Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`UserServiceImpl`] | Registration, profile read/update, password and credential checks |

pub mod user_service;

pub use user_service::UserServiceImpl;
