//! Answers collected for questions.

pub mod value;
