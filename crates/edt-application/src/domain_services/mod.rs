//! Use case interfaces and their request/response types

pub mod user;

pub use user::{RegisterUserRequest, UpdateProfileRequest, UserProfile, UserServiceInterface};
