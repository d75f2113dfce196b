//! Question store backed by a local JSON document file.
//!
//! The file holds an array of question records. Reads return them in file
//! order; an answer write sets `userAnswer` on the matching record and
//! replaces the file atomically (sibling temp file, then rename).

use super::record::{ANSWER_FIELD, decode_questions, has_id};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use survey_application::{QuestionStore, StoreError};
use survey_domain::{AnswerValue, Question, QuestionId};
use tokio::sync::Mutex;
use tracing::debug;

/// [`QuestionStore`] over a JSON file of question records.
///
/// Concurrent writes are serialized so each read-modify-write sees the
/// previous one.
pub struct JsonFileQuestionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileQuestionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<Value>, String> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| format!("{}: {}", self.path.display(), e))?;
        serde_json::from_str(&content).map_err(|e| format!("{}: {}", self.path.display(), e))
    }

    async fn write_records(&self, records: &[Value]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Io(format!("serialize {}: {}", self.path.display(), e)))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl QuestionStore for JsonFileQuestionStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let records = self.read_records().await.map_err(StoreError::Fetch)?;
        debug!("Read {} records from {}", records.len(), self.path.display());
        decode_questions(records)
    }

    async fn save_answer(&self, id: &QuestionId, value: &AnswerValue) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self
            .read_records()
            .await
            .map_err(|reason| StoreError::Write {
                id: id.clone(),
                reason,
            })?;

        let record = records
            .iter_mut()
            .find(|record| has_id(record, id.as_str()))
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let Some(fields) = record.as_object_mut() else {
            return Err(StoreError::Write {
                id: id.clone(),
                reason: "record is not an object".to_string(),
            });
        };
        let value = serde_json::to_value(value).map_err(|e| StoreError::Write {
            id: id.clone(),
            reason: e.to_string(),
        })?;
        fields.insert(ANSWER_FIELD.to_string(), value);

        self.write_records(&records).await?;
        debug!("Saved answer for {} to {}", id, self.path.display());
        Ok(())
    }
}
