//! Presentation layer for survey-form
//!
//! This crate contains CLI definitions, console rendering,
//! progress reporters, and the interactive form.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use form::{FormCommand, SurveyRepl};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleProgress, SubmitProgressReporter};
