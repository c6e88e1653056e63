//! Security bootstrap
//!
//! Composition root for the cryptographic services. Builds the hashing and
//! encryption providers once from validated configuration and hands them out
//! as shared trait objects.
//!
//! ```text
//! AppConfig → validate → HashingService ─────────┐
//!                      → AesDataEncryptionService ┴→ SecurityContext
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let security = init_security(config)?;
//! let lookup = security.hashing().hash_email("alice@example.com");
//! ```

use crate::config::{AppConfig, validate_app_config};
use crate::crypto::{AesDataEncryptionService, HashingService};
use edt_domain::error::Result;
use edt_domain::ports::{DataEncryptionProvider, HashingProvider};
use std::sync::Arc;
use tracing::info;

/// Shared security services built from configuration
#[derive(Clone)]
pub struct SecurityContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    hashing: Arc<dyn HashingProvider>,
    encryption: Arc<dyn DataEncryptionProvider>,
}

impl SecurityContext {
    /// Assemble a context from already-built providers
    pub fn new(
        config: Arc<AppConfig>,
        hashing: Arc<dyn HashingProvider>,
        encryption: Arc<dyn DataEncryptionProvider>,
    ) -> Self {
        Self {
            config,
            hashing,
            encryption,
        }
    }

    /// Password and email lookup hashing
    pub fn hashing(&self) -> Arc<dyn HashingProvider> {
        Arc::clone(&self.hashing)
    }

    /// Sensitive payload encryption
    pub fn encryption(&self) -> Arc<dyn DataEncryptionProvider> {
        Arc::clone(&self.encryption)
    }
}

impl std::fmt::Debug for SecurityContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityContext")
            .field("encryption", &self.encryption.provider_name())
            .finish_non_exhaustive()
    }
}

/// Build the security services from configuration
///
/// Fails with `Error::Configuration` when a key is missing or malformed, so
/// callers should treat an error here as fatal.
pub fn init_security(config: AppConfig) -> Result<SecurityContext> {
    validate_app_config(&config)?;

    let hashing = HashingService::from_config(&config.hashing)?;
    let encryption = AesDataEncryptionService::from_config(&config.data_encryption)?;

    info!(
        password_work_factor = hashing.password_cost(),
        encryption = encryption.provider_name(),
        "Security services initialized"
    );

    Ok(SecurityContext::new(
        Arc::new(config),
        Arc::new(hashing),
        Arc::new(encryption),
    ))
}
