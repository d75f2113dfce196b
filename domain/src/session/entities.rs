//! Survey session state (Entity)

use super::event::{FlowEvent, FlowRejection};
use crate::answer::value::AnswerValue;
use crate::core::question::{Question, QuestionId};
use std::collections::HashMap;
use std::sync::Arc;

/// Coarse state of the question flow, as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// Questions are being fetched
    Loading,
    /// Navigating questions
    Active,
    /// The submit confirmation panel is open
    Confirming,
}

impl FlowPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowPhase::Loading => "loading",
            FlowPhase::Active => "active",
            FlowPhase::Confirming => "confirming",
        }
    }
}

/// Immutable snapshot of a survey session.
///
/// Holds the loaded questions, the current position, the answers given so
/// far and whether the confirmation panel is open. [`SessionState::apply`]
/// never mutates a snapshot; it returns the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    questions: Arc<[Question]>,
    position: usize,
    answers: HashMap<QuestionId, AnswerValue>,
    confirming: bool,
}

impl SessionState {
    /// Fresh session at the first question with no answers.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
            position: 0,
            answers: HashMap::new(),
            confirming: false,
        }
    }

    /// Session with nothing to render (e.g. after a failed fetch).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn answers(&self) -> &HashMap<QuestionId, AnswerValue> {
        &self.answers
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn phase(&self) -> FlowPhase {
        if self.confirming {
            FlowPhase::Confirming
        } else {
            FlowPhase::Active
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn answer_for(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question().and_then(|q| self.answers.get(&q.id))
    }

    pub fn is_last(&self) -> bool {
        !self.is_empty() && self.position == self.len() - 1
    }

    /// Readiness check gating both "Continue" and "Submit Answers".
    ///
    /// False when there is no current question or no entry for it.
    pub fn is_current_answer_complete(&self) -> bool {
        match (self.current_question(), self.current_answer()) {
            (Some(question), Some(answer)) => answer.is_complete_for(question),
            _ => false,
        }
    }

    pub fn can_retreat(&self) -> bool {
        !self.confirming && self.position > 0
    }

    pub fn can_advance(&self) -> bool {
        !self.confirming && self.position + 1 < self.len() && self.is_current_answer_complete()
    }

    pub fn can_open_confirmation(&self) -> bool {
        !self.confirming && self.is_last() && self.is_current_answer_complete()
    }

    /// Answers paired with their questions, in presentation order.
    pub fn answered_questions(&self) -> impl Iterator<Item = (&Question, &AnswerValue)> {
        self.questions
            .iter()
            .filter_map(|q| self.answers.get(&q.id).map(|a| (q, a)))
    }

    /// Apply one event, producing the next snapshot.
    pub fn apply(&self, event: FlowEvent) -> Result<SessionState, FlowRejection> {
        if self.is_empty() {
            return Err(FlowRejection::NoQuestions);
        }

        match event {
            FlowEvent::AnswerChanged { question_id, value } => {
                if self.confirming {
                    return Err(FlowRejection::ConfirmationOpen);
                }
                if self.current_question().map(|q| &q.id) != Some(&question_id) {
                    return Err(FlowRejection::NotCurrentQuestion(question_id));
                }
                let mut next = self.clone();
                next.answers.insert(question_id, value);
                Ok(next)
            }
            FlowEvent::Advance => {
                if self.confirming {
                    return Err(FlowRejection::ConfirmationOpen);
                }
                if self.position + 1 >= self.len() {
                    return Err(FlowRejection::AtLastQuestion);
                }
                if !self.is_current_answer_complete() {
                    return Err(FlowRejection::AnswerIncomplete);
                }
                let mut next = self.clone();
                next.position += 1;
                Ok(next)
            }
            FlowEvent::Retreat => {
                if self.confirming {
                    return Err(FlowRejection::ConfirmationOpen);
                }
                if self.position == 0 {
                    return Err(FlowRejection::AtFirstQuestion);
                }
                // Both the question being left and the one being returned to
                // lose their entries; the revisited question starts blank.
                let mut next = self.clone();
                next.answers.remove(&self.questions[self.position].id);
                next.position -= 1;
                next.answers.remove(&self.questions[next.position].id);
                Ok(next)
            }
            FlowEvent::OpenConfirmation => {
                if self.confirming {
                    return Err(FlowRejection::ConfirmationOpen);
                }
                if !self.is_last() {
                    return Err(FlowRejection::NotAtLastQuestion);
                }
                if !self.is_current_answer_complete() {
                    return Err(FlowRejection::AnswerIncomplete);
                }
                let mut next = self.clone();
                next.confirming = true;
                Ok(next)
            }
            FlowEvent::CloseConfirmation => {
                if !self.confirming {
                    return Err(FlowRejection::ConfirmationClosed);
                }
                let mut next = self.clone();
                next.confirming = false;
                Ok(next)
            }
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::empty()
    }
}
