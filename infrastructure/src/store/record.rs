//! Decoding of raw question records
//!
//! Both store adapters receive records as loose JSON objects
//! (`{ id, questionLabel, answerFormat, options?, userAnswer? }`). Records are
//! decoded one by one so a malformed record is reported by id or position.

use serde_json::Value;
use survey_application::StoreError;
use survey_domain::Question;

/// Field written on submit.
pub const ANSWER_FIELD: &str = "userAnswer";

/// Decode a list of raw records, keeping their order.
pub fn decode_questions(records: Vec<Value>) -> Result<Vec<Question>, StoreError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| decode_question(index, record))
        .collect()
}

fn decode_question(index: usize, record: Value) -> Result<Question, StoreError> {
    let label = record
        .get("id")
        .and_then(Value::as_str)
        .map(|id| format!("record {}", id))
        .unwrap_or_else(|| format!("record #{}", index));

    serde_json::from_value(record).map_err(|e| StoreError::Decode(format!("{}: {}", label, e)))
}

/// Whether `record` is the one identified by `id`.
pub fn has_id(record: &Value, id: &str) -> bool {
    record.get("id").and_then(Value::as_str) == Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use survey_domain::AnswerFormat;

    #[test]
    fn test_decode_keeps_order_and_ignores_answer_field() {
        let records = vec![
            json!({"id": "b", "questionLabel": "Second?", "answerFormat": "date"}),
            json!({"id": "a", "questionLabel": "First?", "answerFormat": "text", "userAnswer": "old"}),
        ];
        let questions = decode_questions(records).unwrap();
        assert_eq!(questions[0].id.as_str(), "b");
        assert_eq!(questions[0].answer_format, AnswerFormat::Date);
        assert_eq!(questions[1].id.as_str(), "a");
    }

    #[test]
    fn test_decode_error_names_record() {
        let records = vec![
            json!({"id": "ok", "questionLabel": "Fine", "answerFormat": "text"}),
            json!({"id": "bad", "questionLabel": "Broken", "answerFormat": "slider"}),
        ];
        match decode_questions(records) {
            Err(StoreError::Decode(msg)) => assert!(msg.starts_with("record bad:")),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_without_id_uses_position() {
        let records = vec![json!({"questionLabel": "No id", "answerFormat": "text"})];
        match decode_questions(records) {
            Err(StoreError::Decode(msg)) => assert!(msg.starts_with("record #0:")),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_has_id() {
        let record = json!({"id": "q1"});
        assert!(has_id(&record, "q1"));
        assert!(!has_id(&record, "q2"));
        assert!(!has_id(&json!({}), "q1"));
    }
}
