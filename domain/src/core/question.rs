//! Question entity and its answer format

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::DomainError;

/// Identity of a question record in the store (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// How a question is answered, and therefore which input widget renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerFormat {
    /// Free text
    Text,
    /// A single free number
    Number,
    /// Single choice among `options` (radio buttons)
    Radio,
    /// Single choice among `options` (dropdown)
    Select,
    /// Calendar date (`YYYY-MM-DD`)
    Date,
    /// Several text fields, one per entry of `options`
    TextMulti,
}

impl AnswerFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerFormat::Text => "text",
            AnswerFormat::Number => "number",
            AnswerFormat::Radio => "radio",
            AnswerFormat::Select => "select",
            AnswerFormat::Date => "date",
            AnswerFormat::TextMulti => "text-multi",
        }
    }

    /// Choice formats pick one of the question's options.
    pub fn is_choice(&self) -> bool {
        matches!(self, AnswerFormat::Radio | AnswerFormat::Select)
    }

    pub fn is_multi_field(&self) -> bool {
        matches!(self, AnswerFormat::TextMulti)
    }
}

impl std::fmt::Display for AnswerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(AnswerFormat::Text),
            "number" => Ok(AnswerFormat::Number),
            "radio" => Ok(AnswerFormat::Radio),
            "select" => Ok(AnswerFormat::Select),
            "date" => Ok(AnswerFormat::Date),
            "text-multi" => Ok(AnswerFormat::TextMulti),
            other => Err(DomainError::UnknownAnswerFormat(other.to_string())),
        }
    }
}

/// A survey question as stored in the question collection (Entity)
///
/// Immutable once loaded. Field names follow the store's record shape
/// (`questionLabel`, `answerFormat`, `options`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "questionLabel")]
    pub label: String,
    pub answer_format: AnswerFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, label: impl Into<String>, format: AnswerFormat) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            answer_format: format,
            options: None,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Option labels, empty when the record carries none.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    pub fn option_count(&self) -> usize {
        self.options().len()
    }
}
