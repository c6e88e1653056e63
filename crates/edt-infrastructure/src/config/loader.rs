//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values. Secrets are validated at load time so a process never
//! starts with a key it cannot use.

use crate::config::{AppConfig, DataEncryptionConfig, HashingConfig, LoggingConfig};
use crate::constants::*;
use crate::crypto::{decode_key, validate_work_factor};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use edt_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `EDT__HASHING__EMAIL_HMAC_KEY`)
    pub fn load(&self) -> Result<AppConfig> {
        let app_config = self.extract()?;
        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Merge all sources without validating secrets
    ///
    /// Used by tooling that must run before keys exist, such as key generation.
    pub fn load_unvalidated(&self) -> Result<AppConfig> {
        self.extract()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File the TOML layer is read from: the explicit path, else the first
    /// default location found
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Report which configuration file was used
    ///
    /// Call once a subscriber is installed; loading itself emits no events
    /// because logging is configured from the loaded values.
    pub fn log_source(&self) {
        if let Some(path) = self.resolved_config_path() {
            log_config_loaded(&path, path.exists());
        }
    }

    /// Get the environment variable prefix
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    fn extract(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.resolved_config_path()
            && config_path.exists()
        {
            figment = figment.merge(Toml::file(config_path));
        }

        // Double underscore separates nested keys so single underscores
        // survive inside field names (EDT__HASHING__EMAIL_HMAC_KEY)
        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        figment
            .extract()
            .config_context("Failed to extract configuration")
    }

    /// Find the first existing default configuration file
    pub fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Every failure is an `Error::Configuration` and is fatal at startup.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_hashing_config(&config.hashing)?;
    validate_data_encryption_config(&config.data_encryption)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_hashing_config(config: &HashingConfig) -> Result<()> {
    if config.email_hmac_key.trim().is_empty() {
        return Err(Error::configuration(
            "hashing.email_hmac_key must be provided in configuration",
        ));
    }
    validate_work_factor(config.password_work_factor)
}

fn validate_data_encryption_config(config: &DataEncryptionConfig) -> Result<()> {
    decode_key(&config.key).map(|_| ())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set the email lookup HMAC key
    pub fn with_email_hmac_key<S: Into<String>>(mut self, key: S) -> Self {
        self.config.hashing.email_hmac_key = key.into();
        self
    }

    /// Set the bcrypt work factor
    pub fn with_password_work_factor(mut self, cost: u32) -> Self {
        self.config.hashing.password_work_factor = cost;
        self
    }

    /// Set the base64-encoded data encryption key
    pub fn with_data_encryption_key<S: Into<String>>(mut self, key: S) -> Self {
        self.config.data_encryption.key = key.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }

    /// Build and validate the configuration
    pub fn build_validated(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
