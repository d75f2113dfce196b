//! Domain layer for survey-form
//!
//! This crate contains the survey's entities, value objects and the
//! question-flow state machine. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Question**: a record loaded from the question store, with a label, an
//!   [`AnswerFormat`] and optional option labels
//! - **AnswerValue**: text, number, or one string per sub-field for
//!   multi-field questions
//! - **SessionState**: which question is shown, the answers so far, and
//!   whether the submit confirmation is open. Every [`FlowEvent`] produces a
//!   new snapshot or a [`FlowRejection`].

pub mod answer;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use answer::value::AnswerValue;
pub use core::{
    error::DomainError,
    question::{AnswerFormat, Question, QuestionId},
    string::truncate,
};
pub use session::{
    entities::{FlowPhase, SessionState},
    event::{FlowEvent, FlowRejection},
};
