//! Events consumed by the question-flow state machine

use crate::answer::value::AnswerValue;
use crate::core::question::QuestionId;
use thiserror::Error;

/// A discrete user gesture applied to a [`SessionState`](super::entities::SessionState).
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// The rendered input for the current question changed.
    AnswerChanged {
        question_id: QuestionId,
        value: AnswerValue,
    },
    /// "Continue"
    Advance,
    /// "Back"
    Retreat,
    /// "Submit Answers" on the last question
    OpenConfirmation,
    /// "Cancel" on the confirmation panel
    CloseConfirmation,
}

impl FlowEvent {
    pub fn answer(question_id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        FlowEvent::AnswerChanged {
            question_id: question_id.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::AnswerChanged { .. } => "answer_changed",
            FlowEvent::Advance => "advance",
            FlowEvent::Retreat => "retreat",
            FlowEvent::OpenConfirmation => "open_confirmation",
            FlowEvent::CloseConfirmation => "close_confirmation",
        }
    }
}

/// Why an event was not applied. The session is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowRejection {
    #[error("No questions are loaded")]
    NoQuestions,

    #[error("Already at the first question")]
    AtFirstQuestion,

    #[error("Already at the last question")]
    AtLastQuestion,

    #[error("Confirmation is only available on the last question")]
    NotAtLastQuestion,

    #[error("The current question has not been answered completely")]
    AnswerIncomplete,

    #[error("Question {0} is not the current question")]
    NotCurrentQuestion(QuestionId),

    #[error("The confirmation panel is open")]
    ConfirmationOpen,

    #[error("The confirmation panel is not open")]
    ConfirmationClosed,
}
