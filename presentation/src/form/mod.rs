//! The interactive survey form: input parsing, commands and the REPL.

mod command;
mod input;
mod repl;

pub use command::{FormCommand, HELP};
pub use input::{InputError, parse_answer};
pub use repl::{Step, SurveyRepl};
