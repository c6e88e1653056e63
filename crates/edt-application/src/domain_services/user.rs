//! User service interface
//!
//! Requests carry plaintext only on the way in; responses carry plaintext
//! only on the way out. Nothing here is persisted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use edt_domain::entities::{Auditable, SensitiveEntity, User};
use edt_domain::error::{Error, Result};
use edt_domain::value_objects::{SystemRole, UserSensitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Registration input
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("user_name", &self.user_name)
            .finish_non_exhaustive()
    }
}

/// Partial profile update; `None` leaves a field unchanged
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UpdateProfileRequest {
    /// Whether the request changes anything
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.middle_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
    }
}

impl fmt::Debug for UpdateProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateProfileRequest")
            .field("first_name", &self.first_name.is_some())
            .field("middle_name", &self.middle_name.is_some())
            .field("last_name", &self.last_name.is_some())
            .field("email", &self.email.is_some())
            .finish()
    }
}

/// Decrypted view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub role: SystemRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Build a profile from a user whose payload has been decrypted
    ///
    /// Fails with `Error::InvalidState` when the plaintext cache is empty.
    pub fn from_user(user: &User) -> Result<Self> {
        let sensitive: &UserSensitive = user
            .sensitive_data()
            .ok_or_else(|| Error::invalid_state("user does not have decrypted sensitive data"))?;

        Ok(Self {
            id: user.id(),
            first_name: sensitive.first_name.clone(),
            middle_name: sensitive.middle_name.clone(),
            last_name: sensitive.last_name.clone(),
            user_name: user.user_name().to_string(),
            email: sensitive.email.clone(),
            role: user.role(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        })
    }
}

/// User account use cases
#[async_trait]
pub trait UserServiceInterface: Send + Sync {
    /// Register a new user
    ///
    /// Fails with `Validation` on blank input (before any hashing) and with
    /// `AlreadyExists` on a taken user name or email.
    async fn register(&self, request: RegisterUserRequest) -> Result<UserProfile>;

    /// Decrypt and return a user's profile
    async fn get_profile(&self, id: Uuid) -> Result<UserProfile>;

    /// Re-encrypt a user's profile with the given changes
    ///
    /// Fails with `Conflict`, leaving the stored user untouched, when the
    /// user was modified between this call's read and its write.
    async fn update_profile(&self, id: Uuid, update: UpdateProfileRequest) -> Result<UserProfile>;

    /// Replace the password after verifying the current one
    ///
    /// Fails with `Conflict` on a concurrent modification, like
    /// [`UserServiceInterface::update_profile`].
    async fn change_password(&self, id: Uuid, current: &str, new: &str) -> Result<()>;

    /// Resolve an email/password pair to a user id
    ///
    /// An unknown email and a wrong password both yield `Ok(None)`.
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<Uuid>>;

    /// Whether no user is registered with this email
    async fn is_email_available(&self, email: &str) -> Result<bool>;
}
