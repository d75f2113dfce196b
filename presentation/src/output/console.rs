//! Console rendering of survey sessions
//!
//! Every function here is a pure projection of a [`SessionState`] (or a
//! submission result) into text; nothing reads input or touches the store.

use colored::Colorize;
use survey_application::{SubmitError, SubmitOutcome};
use survey_domain::{AnswerFormat, AnswerValue, Question, SessionState, truncate};

const CONFIRM_PROMPT: &str = "are you sure you want to submit these answers?";
const MAX_SUMMARY_LEN: usize = 72;

/// Formats survey sessions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render the current question, its input, the navigation buttons and,
    /// when open, the confirmation panel.
    pub fn format_session(state: &SessionState) -> String {
        let Some(question) = state.current_question() else {
            return format!("{}\n", "No questions to show.".dimmed());
        };

        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            format!("Question {} of {}", state.position() + 1, state.len()).dimmed()
        ));
        output.push_str(&format!("{}\n", question.label.bold()));
        output.push_str(&Self::format_input(question, state.current_answer()));
        output.push_str(&Self::format_buttons(state));

        if state.is_confirming() {
            output.push('\n');
            output.push_str(&Self::format_confirmation(state));
        }

        output
    }

    /// The input widget for `question`, showing the current value.
    fn format_input(question: &Question, answer: Option<&AnswerValue>) -> String {
        let mut output = String::new();

        if question.answer_format.is_choice() {
            let selected = answer.map(AnswerValue::to_string);
            for (i, option) in question.options().iter().enumerate() {
                let marker = if selected.as_deref() == Some(option.as_str()) {
                    "(*)".green().to_string()
                } else {
                    "( )".to_string()
                };
                output.push_str(&format!("  {} {}) {}\n", marker, i + 1, option));
            }
            output.push_str(&format!("  {}\n", "type an option or its number".dimmed()));
        } else if question.answer_format.is_multi_field() {
            let values = answer.and_then(AnswerValue::fields).unwrap_or(&[]);
            for (i, label) in question.options().iter().enumerate() {
                let value = values.get(i).map(String::as_str).unwrap_or("");
                let shown = if value.is_empty() {
                    "_".dimmed().to_string()
                } else {
                    value.to_string()
                };
                output.push_str(&format!("  {}. {}: {}\n", i + 1, label, shown));
            }
            output.push_str(&format!(
                "  {}\n",
                "type N=value, or a value for the first empty field".dimmed()
            ));
        } else {
            let hint = match question.answer_format {
                AnswerFormat::Number => "a number",
                AnswerFormat::Date => "a date, YYYY-MM-DD",
                _ => "text",
            };
            let current = match answer {
                Some(value) if !value.to_string().is_empty() => value.to_string(),
                _ => "_".dimmed().to_string(),
            };
            output.push_str(&format!("  > {}  {}\n", current, format!("({})", hint).dimmed()));
        }

        output
    }

    /// "Back" only past the first question; "Continue" or, on the last
    /// question, "Submit Answers", marked disabled while the answer is
    /// incomplete.
    fn format_buttons(state: &SessionState) -> String {
        if state.is_confirming() {
            return String::new();
        }

        let mut buttons = Vec::new();
        if state.position() > 0 {
            buttons.push("[Back :back]".to_string());
        }

        let (label, enabled) = if state.is_last() {
            ("Submit Answers :submit", state.can_open_confirmation())
        } else {
            ("Continue :next", state.can_advance())
        };
        if enabled {
            buttons.push(format!("[{}]", label).cyan().bold().to_string());
        } else {
            buttons.push(format!("[{}] (answer to enable)", label).dimmed().to_string());
        }

        format!("\n{}\n", buttons.join("  "))
    }

    /// The confirmation panel: one `id: value` line per answer.
    pub fn format_confirmation(state: &SessionState) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", CONFIRM_PROMPT.yellow().bold()));
        for (question, answer) in state.answered_questions() {
            let line = format!("{}: {}", question.id, answer);
            output.push_str(&format!("  {}\n", truncate(&line, MAX_SUMMARY_LEN)));
        }
        output.push_str(&format!(
            "{}  {}\n",
            "[Cancel :cancel]",
            "[Submit :yes]".green().bold()
        ));
        output
    }

    /// Message after a successful submission.
    pub fn format_submit_outcome(outcome: &SubmitOutcome) -> String {
        format!(
            "{} {} answers saved. Starting over.\n",
            "v".green(),
            outcome.saved
        )
    }

    /// Message after a failed submission. The answers are still in place.
    pub fn format_submit_error(error: &SubmitError) -> String {
        let mut output = format!("{} {}\n", "x".red(), error.to_string().red());
        if let SubmitError::WriteFailed { failures, .. } = error {
            for failure in failures {
                output.push_str(&format!("  {}: {}\n", failure.question_id, failure.error));
            }
            output.push_str(&format!(
                "{}\n",
                "Your answers are kept; type :yes to try again or :cancel to go back.".dimmed()
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_application::{StoreError, WriteFailure};
    use survey_domain::{FlowEvent, QuestionId};

    fn session() -> SessionState {
        SessionState::new(vec![
            Question::new("1", "Your name", AnswerFormat::Text),
            Question::new("2", "Favourite genre", AnswerFormat::Select)
                .with_options(["Drama", "Comedy"]),
        ])
    }

    #[test]
    fn test_empty_session() {
        let output = ConsoleFormatter::format_session(&SessionState::empty());
        assert!(output.contains("No questions to show."));
    }

    #[test]
    fn test_first_question_has_no_back_button() {
        let output = ConsoleFormatter::format_session(&session());
        assert!(output.contains("Question 1 of 2"));
        assert!(output.contains("Your name"));
        assert!(!output.contains(":back"));
        assert!(output.contains("answer to enable"));
    }

    #[test]
    fn test_last_question_offers_submit() {
        let state = session()
            .apply(FlowEvent::answer("1", "Ada"))
            .unwrap()
            .apply(FlowEvent::Advance)
            .unwrap()
            .apply(FlowEvent::answer("2", "Comedy"))
            .unwrap();
        let output = ConsoleFormatter::format_session(&state);
        assert!(output.contains(":back"));
        assert!(output.contains("Submit Answers :submit"));
        assert!(!output.contains("answer to enable"));
        assert!(output.contains("2) Comedy"));
    }

    #[test]
    fn test_confirmation_lists_answers() {
        let state = session()
            .apply(FlowEvent::answer("1", "Ada"))
            .unwrap()
            .apply(FlowEvent::Advance)
            .unwrap()
            .apply(FlowEvent::answer("2", "Drama"))
            .unwrap()
            .apply(FlowEvent::OpenConfirmation)
            .unwrap();
        let output = ConsoleFormatter::format_session(&state);
        assert!(output.contains(CONFIRM_PROMPT));
        assert!(output.contains("1: Ada"));
        assert!(output.contains("2: Drama"));
        assert!(output.contains(":yes"));
    }

    #[test]
    fn test_multi_field_values_shown() {
        let state = SessionState::new(vec![
            Question::new("m", "Contact", AnswerFormat::TextMulti).with_options(["email", "tel"]),
        ])
        .apply(FlowEvent::answer("m", vec!["a@b.c".to_string(), String::new()]))
        .unwrap();
        let output = ConsoleFormatter::format_session(&state);
        assert!(output.contains("1. email: a@b.c"));
        assert!(output.contains("2. tel: "));
    }

    #[test]
    fn test_submit_error_lists_failures() {
        let error = SubmitError::WriteFailed {
            attempted: 2,
            failures: vec![WriteFailure {
                question_id: QuestionId::new("2"),
                error: StoreError::NotFound(QuestionId::new("2")),
            }],
        };
        let output = ConsoleFormatter::format_submit_error(&error);
        assert!(output.contains("1 of 2 answer writes failed"));
        assert!(output.contains("2: Question 2 does not exist"));
        assert!(output.contains(":yes"));
    }
}
