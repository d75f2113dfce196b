//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod store;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use store::{FileStoreConfig, StoreBackend};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("store.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("store.collection cannot be empty")]
    EmptyCollection,

    #[error("store.path cannot be empty for the file backend")]
    EmptyPath,

    #[error("store.base_url is required for the http backend")]
    MissingBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question store settings
    pub store: FileStoreConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Session log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.store.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.store.collection.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyCollection);
        }
        match self.store.backend {
            StoreBackend::File => {
                if self.store.path.trim().is_empty() {
                    issues.push(ConfigValidationError::EmptyPath);
                }
            }
            StoreBackend::Http => {
                if self
                    .store
                    .base_url
                    .as_deref()
                    .is_none_or(|url| url.trim().is_empty())
                {
                    issues.push(ConfigValidationError::MissingBaseUrl);
                }
            }
        }

        issues
    }
}
