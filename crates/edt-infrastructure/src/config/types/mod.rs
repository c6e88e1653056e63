//! Configuration types module

pub mod app;
pub mod logging;
pub mod security;

// Re-export main types
pub use app::*;
