//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GO_MARKETPLACE_STORAGE_DIR` - Directory holding the key-value storage
//!   file
//!
//! ## Optional
//! - `GO_MARKETPLACE_STORAGE_KEY` - Snapshot key (default: `@GoMarketplace`)

use std::path::PathBuf;

use thiserror::Error;

/// Snapshot key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "@GoMarketplace";

/// Configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    /// The configured storage key is empty.
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

/// Cart storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory holding the key-value storage file.
    pub storage_dir: PathBuf,
    /// Key the cart snapshot is persisted under.
    pub storage_key: String,
}

impl CartConfig {
    /// Create a configuration with the default storage key.
    #[must_use]
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if `GO_MARKETPLACE_STORAGE_DIR` is
    /// unset and `ConfigError::EmptyStorageKey` if the key override is set
    /// but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_dir = PathBuf::from(get_required_env("GO_MARKETPLACE_STORAGE_DIR")?);
        let storage_key =
            get_env_or_default("GO_MARKETPLACE_STORAGE_KEY", DEFAULT_STORAGE_KEY);

        let config = Self {
            storage_dir,
            storage_key,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
