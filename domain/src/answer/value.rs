//! Answer value object

use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// The value given for one question (Value Object)
///
/// The question's [`AnswerFormat`](crate::AnswerFormat) decides which shape
/// is built: multi-field questions hold one string per sub-field, every other
/// format holds a scalar. On the wire the value is untagged, so it is written
/// to the store as a plain string, number, or array of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    MultiField(Vec<String>),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    /// The empty value a freshly rendered input for `question` starts from.
    ///
    /// Multi-field questions get one empty placeholder per option.
    pub fn blank_for(question: &Question) -> Self {
        if question.answer_format.is_multi_field() {
            AnswerValue::MultiField(vec![String::new(); question.option_count()])
        } else {
            AnswerValue::Text(String::new())
        }
    }

    /// Derive a multi-field answer with sub-field `index` set to `text`.
    ///
    /// Starts from `previous` when it already has the question's shape,
    /// otherwise from blank placeholders, so the result always has exactly
    /// `question.option_count()` entries.
    pub fn with_sub_field(
        previous: Option<&AnswerValue>,
        question: &Question,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !question.answer_format.is_multi_field() {
            return Err(DomainError::NotMultiField(question.id.to_string()));
        }
        let count = question.option_count();
        if index >= count {
            return Err(DomainError::SubFieldOutOfRange {
                question_id: question.id.to_string(),
                index,
                count,
            });
        }

        let mut fields = match previous {
            Some(AnswerValue::MultiField(fields)) if fields.len() == count => fields.clone(),
            _ => vec![String::new(); count],
        };
        fields[index] = text.into();
        Ok(AnswerValue::MultiField(fields))
    }

    /// Whether this value counts as a finished answer to `question`.
    ///
    /// Scalars must be non-empty (numbers must be finite). Multi-field values
    /// must match the option count and have no empty sub-field. A value whose
    /// shape does not fit the question's format is never complete.
    pub fn is_complete_for(&self, question: &Question) -> bool {
        match self {
            AnswerValue::MultiField(fields) => {
                question.answer_format.is_multi_field()
                    && fields.len() == question.option_count()
                    && fields.iter().all(|f| !f.is_empty())
            }
            AnswerValue::Text(text) => !question.answer_format.is_multi_field() && !text.is_empty(),
            AnswerValue::Number(n) => !question.answer_format.is_multi_field() && n.is_finite(),
        }
    }

    /// Sub-field values, if this is a multi-field answer.
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            AnswerValue::MultiField(fields) => Some(fields),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Text(text) => f.write_str(text),
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::MultiField(fields) => f.write_str(&fields.join(",")),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(fields: Vec<String>) -> Self {
        AnswerValue::MultiField(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::AnswerFormat;

    fn multi(count: usize) -> Question {
        let labels: Vec<String> = (1..=count).map(|i| format!("Field {}", i)).collect();
        Question::new("m", "Contact details", AnswerFormat::TextMulti).with_options(labels)
    }

    fn fields(values: &[&str]) -> AnswerValue {
        AnswerValue::MultiField(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_multi_field_with_gap_is_incomplete() {
        let q = multi(3);
        assert!(!fields(&["a", "", "c"]).is_complete_for(&q));
        assert!(fields(&["a", "b", "c"]).is_complete_for(&q));
    }

    #[test]
    fn test_multi_field_length_must_match_options() {
        let q = multi(3);
        assert!(!fields(&["a", "b"]).is_complete_for(&q));
        assert!(!fields(&["a", "b", "c", "d"]).is_complete_for(&q));
    }

    #[test]
    fn test_scalar_completeness() {
        let q = Question::new("1", "Name", AnswerFormat::Text);
        assert!(AnswerValue::text("hello").is_complete_for(&q));
        assert!(!AnswerValue::text("").is_complete_for(&q));
        assert!(!fields(&["x"]).is_complete_for(&q));

        let n = Question::new("2", "Age", AnswerFormat::Number);
        assert!(AnswerValue::Number(0.0).is_complete_for(&n));
        assert!(!AnswerValue::Number(f64::NAN).is_complete_for(&n));
    }

    #[test]
    fn test_scalar_on_multi_field_question_is_incomplete() {
        assert!(!AnswerValue::text("abc").is_complete_for(&multi(1)));
    }

    #[test]
    fn test_blank_for_multi_field_has_placeholders() {
        assert_eq!(AnswerValue::blank_for(&multi(3)), fields(&["", "", ""]));
        let q = Question::new("1", "Name", AnswerFormat::Text);
        assert_eq!(AnswerValue::blank_for(&q), AnswerValue::text(""));
    }

    #[test]
    fn test_with_sub_field_starts_from_blank() {
        let q = multi(3);
        let value = AnswerValue::with_sub_field(None, &q, 1, "b").unwrap();
        assert_eq!(value, fields(&["", "b", ""]));
    }

    #[test]
    fn test_with_sub_field_keeps_previous_values() {
        let q = multi(3);
        let prev = fields(&["a", "", "c"]);
        let value = AnswerValue::with_sub_field(Some(&prev), &q, 1, "b").unwrap();
        assert_eq!(value, fields(&["a", "b", "c"]));
    }

    #[test]
    fn test_with_sub_field_resets_misshapen_previous() {
        let q = multi(2);
        let prev = AnswerValue::text("stale");
        let value = AnswerValue::with_sub_field(Some(&prev), &q, 0, "x").unwrap();
        assert_eq!(value, fields(&["x", ""]));
    }

    #[test]
    fn test_with_sub_field_rejects_out_of_range() {
        let err = AnswerValue::with_sub_field(None, &multi(2), 2, "x").unwrap_err();
        assert!(matches!(err, DomainError::SubFieldOutOfRange { index: 2, count: 2, .. }));
    }

    #[test]
    fn test_with_sub_field_rejects_scalar_question() {
        let q = Question::new("1", "Name", AnswerFormat::Text);
        assert!(AnswerValue::with_sub_field(None, &q, 0, "x").is_err());
    }

    #[test]
    fn test_untagged_wire_shape() {
        assert_eq!(serde_json::to_value(AnswerValue::text("hi")).unwrap(), "hi");
        assert_eq!(serde_json::to_value(AnswerValue::Number(5.0)).unwrap(), 5.0);
        assert_eq!(
            serde_json::to_value(fields(&["a", "b"])).unwrap(),
            serde_json::json!(["a", "b"])
        );
        let parsed: AnswerValue = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, AnswerValue::Number(5.0));
    }

    #[test]
    fn test_display_joins_fields() {
        assert_eq!(fields(&["a", "b", "c"]).to_string(), "a,b,c");
        assert_eq!(AnswerValue::Number(5.0).to_string(), "5");
        assert_eq!(AnswerValue::Number(2.5).to_string(), "2.5");
    }
}
