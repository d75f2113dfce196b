//! Question store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};

/// Which question store adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Local JSON document file
    #[default]
    File,
    /// Remote REST document store
    Http,
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Path of the JSON document file (`file` backend)
    pub path: String,
    /// Base URL of the document store API (`http` backend)
    pub base_url: Option<String>,
    /// Collection holding the question records
    pub collection: String,
    /// Bearer token sent with every request (`http` backend)
    pub api_token: Option<String>,
    /// Request timeout in seconds (`http` backend)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            path: "questions.json".to_string(),
            base_url: None,
            collection: "questions".to_string(),
            api_token: None,
            timeout_seconds: None,
        }
    }
}
