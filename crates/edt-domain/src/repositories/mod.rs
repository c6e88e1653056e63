//! Repository Ports
//!
//! Abstractions for persistent storage of domain entities.

/// User persistence interface
pub mod user_repository;

pub use user_repository::UserRepository;
