//! Question store port
//!
//! Defines the interface for reading question records from, and writing
//! answers back to, the external document store.

use async_trait::async_trait;
use survey_domain::{AnswerValue, Question, QuestionId};
use thiserror::Error;

/// Errors that can occur during question store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The question list could not be fetched (network, auth, missing file)
    #[error("Failed to fetch questions: {0}")]
    Fetch(String),

    /// A record could not be decoded into a [`Question`]
    #[error("Malformed question record: {0}")]
    Decode(String),

    /// No record exists with the given id
    #[error("Question {0} does not exist")]
    NotFound(QuestionId),

    /// The store rejected the write
    #[error("Write to question {id} rejected: {reason}")]
    Write { id: QuestionId, reason: String },

    /// Local storage I/O failure
    #[error("I/O error: {0}")]
    Io(String),
}

/// Client for the question collection
///
/// This port defines how the application layer talks to the document store.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Fetch every question record, in presentation order.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Set the `userAnswer` field on the record identified by `id`.
    async fn save_answer(&self, id: &QuestionId, value: &AnswerValue) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let e = StoreError::Write {
            id: QuestionId::new("q7"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(e.to_string(), "Write to question q7 rejected: permission denied");
    }
}
