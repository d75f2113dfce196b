//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a survey question loaded from the store
//! - [`question::AnswerFormat`]: the discriminant selecting the input shape
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;
