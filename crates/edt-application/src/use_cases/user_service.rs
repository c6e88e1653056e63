//! User Service Use Case
//!
//! Orchestrates hashing, encryption and the user repository. Plaintext
//! personal data exists only inside a call; what reaches the repository is
//! the lookup hash, the password hash and the encrypted blob.

use crate::codec::{protect, reveal};
use crate::domain_services::user::{
    RegisterUserRequest, UpdateProfileRequest, UserProfile, UserServiceInterface,
};
use crate::factory::UserFactory;
use async_trait::async_trait;
use edt_domain::constants::{FIELD_CURRENT_PASSWORD, FIELD_EMAIL, FIELD_PASSWORD, FIELD_USER_NAME};
use edt_domain::entities::{SensitiveEntity, User};
use edt_domain::error::{Error, Result};
use edt_domain::ports::{DataEncryptionProvider, HashingProvider};
use edt_domain::repositories::UserRepository;
use edt_domain::validation::{ensure_not_empty_and_trim, normalize_email};
use edt_domain::value_objects::UserSensitive;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

fn ensure_password(field: &str, password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(Error::validation(field, "cannot be empty"));
    }
    Ok(())
}

/// User service implementation
pub struct UserServiceImpl {
    hashing: Arc<dyn HashingProvider>,
    encryption: Arc<dyn DataEncryptionProvider>,
    users: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Create new user service with injected dependencies
    pub fn new(
        hashing: Arc<dyn HashingProvider>,
        encryption: Arc<dyn DataEncryptionProvider>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            hashing,
            encryption,
            users,
        }
    }

    async fn load(&self, id: Uuid) -> Result<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {id}")))
    }

    async fn load_decrypted(&self, id: Uuid) -> Result<User> {
        let mut user = self.load(id).await?;
        reveal::<UserSensitive, _>(&mut user, self.encryption.as_ref())?;
        Ok(user)
    }
}

#[async_trait]
impl UserServiceInterface for UserServiceImpl {
    async fn register(&self, request: RegisterUserRequest) -> Result<UserProfile> {
        let user_name = ensure_not_empty_and_trim(FIELD_USER_NAME, &request.user_name)?;
        let email = ensure_not_empty_and_trim(FIELD_EMAIL, &request.email)?;
        ensure_password(FIELD_PASSWORD, &request.password)?;

        if self.users.exists_by_user_name(&user_name).await? {
            return Err(Error::already_exists(format!("user name '{user_name}'")));
        }

        let email_hash = self.hashing.hash_email(&normalize_email(&email));
        if self.users.exists_by_email_hash(&email_hash).await? {
            return Err(Error::already_exists("user with this email"));
        }

        let password_hash = self.hashing.hash_password(&request.password)?;
        let sensitive = UserSensitive {
            first_name: request.first_name.trim().to_string(),
            middle_name: request.middle_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            email,
        };

        let user = UserFactory::create(
            &user_name,
            &email_hash,
            &password_hash,
            sensitive,
            self.encryption.as_ref(),
        )?;
        self.users.insert(&user).await?;

        info!(user_id = %user.id(), "User registered");
        UserProfile::from_user(&user)
    }

    async fn get_profile(&self, id: Uuid) -> Result<UserProfile> {
        let mut user = self.load_decrypted(id).await?;
        let profile = UserProfile::from_user(&user);
        user.clear_decrypted_data();
        profile
    }

    async fn update_profile(&self, id: Uuid, update: UpdateProfileRequest) -> Result<UserProfile> {
        let mut user = self.load_decrypted(id).await?;
        if update.is_empty() {
            return UserProfile::from_user(&user);
        }

        let mut sensitive: UserSensitive = user
            .sensitive_data()
            .cloned()
            .ok_or_else(|| Error::invalid_state("profile was not decrypted"))?;

        if let Some(email) = update.email {
            let email = ensure_not_empty_and_trim(FIELD_EMAIL, &email)?;
            let email_hash = self.hashing.hash_email(&normalize_email(&email));
            if email_hash != user.email_hash() {
                if self.users.exists_by_email_hash(&email_hash).await? {
                    return Err(Error::already_exists("user with this email"));
                }
                user.update_email_hash(&email_hash)?;
            }
            sensitive.email = email;
        }
        if let Some(first_name) = update.first_name {
            sensitive.first_name = first_name.trim().to_string();
        }
        if let Some(middle_name) = update.middle_name {
            sensitive.middle_name = middle_name.trim().to_string();
        }
        if let Some(last_name) = update.last_name {
            sensitive.last_name = last_name.trim().to_string();
        }

        protect(&mut user, sensitive, self.encryption.as_ref())?;
        self.users.update(&user).await?;

        debug!(user_id = %id, "Profile re-encrypted");
        UserProfile::from_user(&user)
    }

    async fn change_password(&self, id: Uuid, current: &str, new: &str) -> Result<()> {
        ensure_password(FIELD_PASSWORD, new)?;
        let mut user = self.load(id).await?;

        if !self.hashing.verify_password(current, user.password_hash())? {
            warn!(user_id = %id, "Password change rejected");
            return Err(Error::validation(FIELD_CURRENT_PASSWORD, "does not match"));
        }

        let password_hash = self.hashing.hash_password(new)?;
        user.update_password_hash(&password_hash)?;
        self.users.update(&user).await?;

        info!(user_id = %id, "Password changed");
        Ok(())
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<Uuid>> {
        if email.trim().is_empty() || password.is_empty() {
            return Ok(None);
        }

        let email_hash = self.hashing.hash_email(email);
        let Some(user) = self.users.find_by_email_hash(&email_hash).await? else {
            return Ok(None);
        };

        if self.hashing.verify_password(password, user.password_hash())? {
            Ok(Some(user.id()))
        } else {
            Ok(None)
        }
    }

    async fn is_email_available(&self, email: &str) -> Result<bool> {
        let email_hash = self.hashing.hash_email(email);
        Ok(!self.users.exists_by_email_hash(&email_hash).await?)
    }
}
