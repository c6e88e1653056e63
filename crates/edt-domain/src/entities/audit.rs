//! Audit timestamp handling
//!
//! [`AuditableDataHandler`] holds the created/updated pair of an entity. The
//! entity owns it by value and never hands out a mutable reference, so the
//! only way to move `updated_at` is through the entity's own mutators.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// Entities that track creation and last-update timestamps
pub trait Auditable {
    /// When the entity was created
    fn created_at(&self) -> DateTime<Utc>;

    /// When durable state last changed
    fn updated_at(&self) -> DateTime<Utc>;

    /// Refresh `updated_at` to the current time
    fn update_audit(&mut self);
}

/// Created/updated timestamp pair
///
/// Invariant: `created_at <= updated_at`. `updated_at` never moves backwards,
/// even when the wall clock does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditableDataHandler {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AuditableDataHandler {
    /// Start an audit pair at the current time
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Start an audit pair at a given instant (both timestamps equal)
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an audit pair loaded from storage
    pub fn restore(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Result<Self> {
        if created_at > updated_at {
            return Err(Error::invalid_argument(format!(
                "created_at ({created_at}) is later than updated_at ({updated_at})"
            )));
        }
        Ok(Self {
            created_at,
            updated_at,
        })
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Set `updated_at` to the current time
    pub fn update_audit(&mut self) {
        self.update_audit_at(Utc::now());
    }

    /// Set `updated_at` to `now`, unless that would move it backwards
    pub fn update_audit_at(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

impl Default for AuditableDataHandler {
    fn default() -> Self {
        Self::new()
    }
}
