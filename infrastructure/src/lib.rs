//! Infrastructure layer for survey-form
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileStoreConfig, StoreBackend,
};
pub use logging::JsonlSessionLogger;
#[cfg(feature = "http-store")]
pub use store::HttpQuestionStore;
pub use store::{JsonFileQuestionStore, build_store};
