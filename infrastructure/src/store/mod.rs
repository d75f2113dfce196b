//! Question store adapters implementing the
//! [`QuestionStore`](survey_application::QuestionStore) port.
//!
//! | Backend | Adapter | Feature |
//! |---------|---------|---------|
//! | `file`  | [`JsonFileQuestionStore`] | always |
//! | `http`  | `HttpQuestionStore` | `http-store` |

#[cfg(feature = "http-store")]
mod http;
mod json_file;
mod record;

#[cfg(feature = "http-store")]
pub use http::HttpQuestionStore;
pub use json_file::JsonFileQuestionStore;

use crate::config::{FileStoreConfig, StoreBackend};
use std::sync::Arc;
use survey_application::{QuestionStore, StoreError};
use tracing::info;

/// Build the store adapter selected by the `[store]` config section.
pub fn build_store(config: &FileStoreConfig) -> Result<Arc<dyn QuestionStore>, StoreError> {
    match config.backend {
        StoreBackend::File => {
            info!("Using question file {}", config.path);
            Ok(Arc::new(JsonFileQuestionStore::new(&config.path)))
        }
        #[cfg(feature = "http-store")]
        StoreBackend::Http => {
            let store = HttpQuestionStore::from_config(config)?;
            info!(
                "Using HTTP question store {}/{}",
                config.base_url.as_deref().unwrap_or_default(),
                config.collection
            );
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "http-store"))]
        StoreBackend::Http => Err(StoreError::Fetch(
            "the http store backend requires the `http-store` feature".to_string(),
        )),
    }
}
