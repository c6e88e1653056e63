//! In-memory user repository
//!
//! Stores [`UserRecord`]s, the same ciphertext-only shape a database table
//! would hold. Data is not persisted and will be lost on restart.

use async_trait::async_trait;
use edt_domain::entities::{SensitiveEntity, User, UserRecord};
use edt_domain::error::{Error, Result};
use edt_domain::repositories::UserRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    by_id: HashMap<Uuid, UserRecord>,
    email_index: HashMap<String, Uuid>,
    name_index: HashMap<String, Uuid>,
}

impl Tables {
    /// Reject a record whose unique keys belong to a different user
    fn check_unique(&self, record: &UserRecord) -> Result<()> {
        if let Some(owner) = self.email_index.get(&record.email_hash)
            && *owner != record.id
        {
            return Err(Error::already_exists("user with this email"));
        }
        if let Some(owner) = self.name_index.get(&record.user_name)
            && *owner != record.id
        {
            return Err(Error::already_exists(format!(
                "user name '{}'",
                record.user_name
            )));
        }
        Ok(())
    }

    fn put(&mut self, record: UserRecord) {
        if let Some(previous) = self.by_id.get(&record.id) {
            self.email_index.remove(&previous.email_hash);
            self.name_index.remove(&previous.user_name);
        }
        self.email_index.insert(record.email_hash.clone(), record.id);
        self.name_index.insert(record.user_name.clone(), record.id);
        self.by_id.insert(record.id, record);
    }
}

/// Persisted rows always carry ciphertext; a scrubbed user would erase the
/// stored payload
fn ensure_encrypted(user: &User) -> Result<()> {
    if user.encrypted_data().is_empty() {
        return Err(Error::invalid_state(format!(
            "user {} has no encrypted data to persist",
            user.id()
        )));
    }
    Ok(())
}

/// In-memory user repository
///
/// Useful for development and testing where persistence is not required.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    tables: RwLock<Tables>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.tables.read().await.by_id.len()
    }

    /// Whether the repository holds no users
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Raw stored row, as persistence would see it
    pub async fn record(&self, id: Uuid) -> Option<UserRecord> {
        self.tables.read().await.by_id.get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<()> {
        ensure_encrypted(user)?;
        let record = user.to_record();
        let mut tables = self.tables.write().await;
        if tables.by_id.contains_key(&record.id) {
            return Err(Error::already_exists(format!("user {}", record.id)));
        }
        tables.check_unique(&record)?;
        tables.put(record);
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        ensure_encrypted(user)?;
        let mut record = user.to_record();
        let mut tables = self.tables.write().await;
        let Some(stored) = tables.by_id.get(&record.id) else {
            return Err(Error::not_found(format!("user {}", record.id)));
        };
        if stored.version != record.version {
            return Err(Error::conflict(format!("user {}", record.id)));
        }
        record.version = stored.version.saturating_add(1);
        tables.check_unique(&record)?;
        tables.put(record);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let record = self.tables.read().await.by_id.get(&id).cloned();
        record.map(User::from_record).transpose()
    }

    async fn find_by_email_hash(&self, email_hash: &str) -> Result<Option<User>> {
        let record = {
            let tables = self.tables.read().await;
            tables
                .email_index
                .get(email_hash)
                .and_then(|id| tables.by_id.get(id))
                .cloned()
        };
        record.map(User::from_record).transpose()
    }

    async fn exists_by_email_hash(&self, email_hash: &str) -> Result<bool> {
        Ok(self.tables.read().await.email_index.contains_key(email_hash))
    }

    async fn exists_by_user_name(&self, user_name: &str) -> Result<bool> {
        Ok(self.tables.read().await.name_index.contains_key(user_name))
    }
}
