//! Configuration file loading for survey-form
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SURVEY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./survey.toml` or `./.survey.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/survey-form/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileStoreConfig,
    StoreBackend,
};
pub use loader::ConfigLoader;
