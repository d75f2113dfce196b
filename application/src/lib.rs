//! Application layer for survey-form
//!
//! This crate contains the survey flow use case and the port definitions it
//! depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{NoProgress, SubmitProgressNotifier},
    question_store::{QuestionStore, StoreError},
    session_logger::{NoSessionLogger, SessionEvent, SessionLogger},
};
pub use use_cases::run_survey::{SubmitError, SubmitOutcome, SurveyController, WriteFailure};
