//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown answer format: {0}")]
    UnknownAnswerFormat(String),

    #[error("Sub-field {index} is out of range for question {question_id} ({count} fields)")]
    SubFieldOutOfRange {
        question_id: String,
        index: usize,
        count: usize,
    },

    #[error("Question {0} is not a multi-field question")]
    NotMultiField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_field_error_display() {
        let error = DomainError::SubFieldOutOfRange {
            question_id: "7".to_string(),
            index: 4,
            count: 3,
        };
        assert_eq!(
            error.to_string(),
            "Sub-field 4 is out of range for question 7 (3 fields)"
        );
    }

    #[test]
    fn test_unknown_format_display() {
        let error = DomainError::UnknownAnswerFormat("slider".to_string());
        assert_eq!(error.to_string(), "Unknown answer format: slider");
    }
}
