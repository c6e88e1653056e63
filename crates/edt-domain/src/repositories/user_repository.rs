//! User Repository Port
//!
//! Persistence interface for [`User`] entities. Implementations store the
//! [`crate::entities::UserRecord`] form, which carries ciphertext only.

use crate::entities::User;
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for user accounts
///
/// Uniqueness of emails is checked through the lookup hash column. No
/// implementation should decrypt stored rows to answer a query.
///
/// # Example
///
/// ```ignore
/// use edt_domain::UserRepository;
///
/// # async fn example(repo: &dyn UserRepository, hash: &str) -> edt_domain::Result<()> {
/// if repo.exists_by_email_hash(hash).await? {
///     // email already registered
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `AlreadyExists` on a duplicate id,
    /// user name, or email hash
    ///
    /// A user without encrypted data is rejected with `InvalidState`.
    async fn insert(&self, user: &User) -> Result<()>;

    /// Overwrite an existing user; fails with `NotFound` if absent
    ///
    /// The write succeeds only if the stored version still equals
    /// [`User::version`]; otherwise it fails with `Conflict` and leaves the
    /// row untouched. A successful update bumps the stored version, so the
    /// caller must reload before writing the same user again. A user
    /// without encrypted data is rejected with `InvalidState`.
    async fn update(&self, user: &User) -> Result<()>;

    /// Load a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Load a user by email lookup hash
    async fn find_by_email_hash(&self, email_hash: &str) -> Result<Option<User>>;

    /// Whether a user with this email lookup hash exists
    async fn exists_by_email_hash(&self, email_hash: &str) -> Result<bool>;

    /// Whether a user with this user name exists
    async fn exists_by_user_name(&self, user_name: &str) -> Result<bool>;
}
