//! Question store backed by a REST document API.
//!
//! - `GET  {base_url}/{collection}` returns the array of question records
//! - `PATCH {base_url}/{collection}/{id}` with `{"userAnswer": value}` sets
//!   the answer on one record
//!
//! Requests carry an optional bearer token. The request timeout, when
//! configured, is the only timeout applied to submission.

use super::record::{ANSWER_FIELD, decode_questions};
use crate::config::FileStoreConfig;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use survey_application::{QuestionStore, StoreError};
use survey_domain::{AnswerValue, Question, QuestionId};
use tracing::debug;

/// [`QuestionStore`] over HTTP.
pub struct HttpQuestionStore {
    client: reqwest::Client,
    collection_url: Url,
    api_token: Option<String>,
}

impl HttpQuestionStore {
    /// Build from the `[store]` config section.
    pub fn from_config(config: &FileStoreConfig) -> Result<Self, StoreError> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| StoreError::Fetch("store.base_url is not set".to_string()))?;
        let collection_url = collection_url(base_url, &config.collection)?;

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "survey-form/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Fetch(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            collection_url,
            api_token: config.api_token.clone(),
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// `{base_url}/{collection}`, tolerating a trailing slash on the base.
fn collection_url(base_url: &str, collection: &str) -> Result<Url, StoreError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| StoreError::Fetch(format!("invalid base_url '{}': {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| StoreError::Fetch(format!("base_url '{}' cannot be a base", base_url)))?
        .pop_if_empty()
        .push(collection);
    Ok(url)
}

/// `{collection_url}/{id}` with the id percent-encoded as one segment.
fn record_url(collection_url: &Url, id: &QuestionId) -> Result<Url, StoreError> {
    let mut url = collection_url.clone();
    url.path_segments_mut()
        .map_err(|_| StoreError::Write {
            id: id.clone(),
            reason: "collection URL cannot be a base".to_string(),
        })?
        .push(id.as_str());
    Ok(url)
}

/// Map a non-success write response to a store error.
fn write_status_error(id: &QuestionId, status: StatusCode, body: &str) -> StoreError {
    if status == StatusCode::NOT_FOUND {
        return StoreError::NotFound(id.clone());
    }
    let reason = match body.trim() {
        "" => format!("HTTP {}", status),
        text => format!("HTTP {}: {}", status, text),
    };
    StoreError::Write {
        id: id.clone(),
        reason,
    }
}

#[async_trait]
impl QuestionStore for HttpQuestionStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let response = self
            .authorize(self.client.get(self.collection_url.clone()))
            .send()
            .await
            .map_err(|e| StoreError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Fetch(format!(
                "GET {} returned HTTP {}",
                self.collection_url, status
            )));
        }

        let records: Vec<Value> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        debug!("Fetched {} records from {}", records.len(), self.collection_url);
        decode_questions(records)
    }

    async fn save_answer(&self, id: &QuestionId, value: &AnswerValue) -> Result<(), StoreError> {
        let url = record_url(&self.collection_url, id)?;
        let body = serde_json::json!({ ANSWER_FIELD: value });

        let response = self
            .authorize(self.client.patch(url))
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Write {
                id: id.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(write_status_error(id, status, &text));
        }

        debug!("Saved answer for {}", id);
        Ok(())
    }
}
