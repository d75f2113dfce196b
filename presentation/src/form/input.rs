//! Turning a typed line into an answer for the current question.
//!
//! This is the console counterpart of the form widgets: a text box, a number
//! box, radio buttons / dropdown, a date picker, and one text box per
//! sub-field. Like the widgets, it only shapes the input; completeness is
//! judged by the flow controller.

use chrono::NaiveDate;
use survey_domain::{AnswerFormat, AnswerValue, DomainError, Question};
use thiserror::Error;

/// Input that cannot be turned into an answer for the question.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("'{input}' is not one of the options ({options})")]
    UnknownOption { input: String, options: String },

    #[error("Every field is filled in; use N=value to change field N")]
    NoEmptySubField,

    #[error(transparent)]
    SubField(#[from] DomainError),
}

/// Build the answer for `question` from one line of input.
///
/// An empty line yields an empty answer (it clears the input). Multi-field
/// questions accept `N=value` for sub-field N (1-based); a plain value fills
/// the first empty sub-field of `previous`.
pub fn parse_answer(
    question: &Question,
    previous: Option<&AnswerValue>,
    line: &str,
) -> Result<AnswerValue, InputError> {
    match question.answer_format {
        AnswerFormat::Text => Ok(AnswerValue::text(line)),
        AnswerFormat::Number => parse_number(line),
        AnswerFormat::Radio | AnswerFormat::Select => parse_choice(question, line),
        AnswerFormat::Date => parse_date(line),
        AnswerFormat::TextMulti => parse_sub_field(question, previous, line),
    }
}

fn parse_number(line: &str) -> Result<AnswerValue, InputError> {
    if line.is_empty() {
        return Ok(AnswerValue::text(""));
    }
    match line.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(AnswerValue::Number(n)),
        _ => Err(InputError::NotANumber(line.to_string())),
    }
}

fn parse_choice(question: &Question, line: &str) -> Result<AnswerValue, InputError> {
    if line.is_empty() {
        return Ok(AnswerValue::text(""));
    }
    let options = question.options();

    if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(line)) {
        return Ok(AnswerValue::text(option.as_str()));
    }
    if let Ok(n) = line.parse::<usize>()
        && (1..=options.len()).contains(&n)
    {
        return Ok(AnswerValue::text(options[n - 1].as_str()));
    }

    Err(InputError::UnknownOption {
        input: line.to_string(),
        options: options.join(", "),
    })
}

fn parse_date(line: &str) -> Result<AnswerValue, InputError> {
    if line.is_empty() {
        return Ok(AnswerValue::text(""));
    }
    let date = NaiveDate::parse_from_str(line, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(line.to_string()))?;
    Ok(AnswerValue::text(date.format("%Y-%m-%d").to_string()))
}

fn parse_sub_field(
    question: &Question,
    previous: Option<&AnswerValue>,
    line: &str,
) -> Result<AnswerValue, InputError> {
    // No sub-fields to fill: any line settles the answer.
    if question.option_count() == 0 {
        return Ok(AnswerValue::MultiField(Vec::new()));
    }

    if let Some((index, value)) = line.split_once('=')
        && let Ok(n) = index.trim().parse::<usize>()
    {
        let index = n.checked_sub(1).ok_or(DomainError::SubFieldOutOfRange {
            question_id: question.id.to_string(),
            index: 0,
            count: question.option_count(),
        })?;
        return Ok(AnswerValue::with_sub_field(
            previous,
            question,
            index,
            value.trim(),
        )?);
    }

    let blank = AnswerValue::blank_for(question);
    let current = match previous {
        Some(AnswerValue::MultiField(fields)) if fields.len() == question.option_count() => {
            previous
        }
        _ => Some(&blank),
    };
    let index = current
        .and_then(AnswerValue::fields)
        .and_then(|fields| fields.iter().position(String::is_empty))
        .ok_or(InputError::NoEmptySubField)?;

    Ok(AnswerValue::with_sub_field(current, question, index, line)?)
}
