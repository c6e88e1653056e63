//! Operator command line
//!
//! Every command returns the text to print so it can be exercised without
//! spawning a process. Commands other than `generate-key` need a complete,
//! valid configuration and fail with `Error::Configuration` otherwise.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use clap::{Parser, Subcommand, ValueEnum};
use edt_domain::error::Result;
use edt_infrastructure::config::{AppConfig, ConfigLoader, validate_app_config};
use edt_infrastructure::constants::HMAC_SECRET_SIZE;
use edt_infrastructure::crypto::{AesDataEncryptionService, random_bytes};
use edt_infrastructure::init_security;
use edt_infrastructure::logging::init_logging;
use std::path::PathBuf;
use tracing::info;

/// Command line interface for the EduTracker sensitive-data core
#[derive(Parser, Debug)]
#[command(name = "edt")]
#[command(about = "EduTracker sensitive-data tooling")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operator commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print a fresh random key, base64-encoded
    GenerateKey {
        /// Which secret to generate
        #[arg(long, value_enum, default_value_t = KeyKind::Encryption)]
        kind: KeyKind,
    },
    /// Print the lookup hash of an email address
    HashEmail {
        /// Email address (normalized before hashing)
        email: String,
    },
    /// Print a bcrypt hash of a password
    HashPassword {
        /// Plaintext password
        password: String,
    },
    /// Validate the configuration and report the effective settings
    CheckConfig,
}

/// Secret kinds understood by `generate-key`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// AES-256 data encryption key (`data_encryption.key`)
    Encryption,
    /// Email lookup HMAC secret (`hashing.email_hmac_key`)
    Hmac,
}

impl Command {
    /// Whether the command needs a loaded configuration
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::GenerateKey { .. })
    }
}

/// Build the configuration loader for the given CLI arguments
pub fn config_loader(cli: &Cli) -> ConfigLoader {
    match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Load the configuration and install logging from it
///
/// Logging comes up before secrets are validated, so the configuration
/// source and any validation failure are reported through the subscriber.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let loader = config_loader(cli);
    let config = loader.load_unvalidated()?;
    init_logging(&config.logging)?;
    loader.log_source();
    validate_app_config(&config)?;
    Ok(config)
}

/// Generate a base64-encoded secret
pub fn generate_key(kind: KeyKind) -> String {
    match kind {
        KeyKind::Encryption => AesDataEncryptionService::generate_key_base64(),
        KeyKind::Hmac => BASE64.encode(random_bytes(HMAC_SECRET_SIZE)),
    }
}

/// Execute a command against a loaded configuration
pub fn execute(command: &Command, config: AppConfig) -> Result<String> {
    match command {
        Command::GenerateKey { kind } => Ok(generate_key(*kind)),
        Command::HashEmail { email } => Ok(init_security(config)?.hashing().hash_email(email)),
        Command::HashPassword { password } => init_security(config)?.hashing().hash_password(password),
        Command::CheckConfig => check_config(config),
    }
}

/// Validate the configuration by building the security services from it
pub fn check_config(config: AppConfig) -> Result<String> {
    let summary = format!(
        "configuration ok: log level {}, bcrypt cost {}",
        config.logging.level, config.hashing.password_work_factor
    );
    let security = init_security(config)?;
    info!(
        encryption = security.encryption().provider_name(),
        "Configuration check passed"
    );
    Ok(summary)
}
