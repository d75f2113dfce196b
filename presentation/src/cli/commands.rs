//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for survey-form
#[derive(Parser, Debug)]
#[command(name = "survey-form")]
#[command(author, version, about = "Answer a survey one question at a time")]
#[command(long_about = r#"
survey-form loads the survey's questions from a document store, shows them one
at a time, and writes your answers back to the store when you submit.

Inside the form:
  <text>     answer the current question
  :next      continue to the next question (once answered)
  :back      go back one question (clears the answer you are leaving)
  :submit    review your answers on the last question
  :yes       confirm and write the answers
  :cancel    close the review panel
  :help      list commands
  :quit      leave without submitting

Configuration files are loaded from (in priority order):
1. SURVEY_* environment variables
2. --config <path>     Explicit config file
3. ./survey.toml       Project-level config
4. ~/.config/survey-form/config.toml   Global config

Example:
  survey-form --store questions.json
  survey-form --store-url https://docs.example.com/v1 --collection questions
"#)]
pub struct Cli {
    /// JSON file holding the question records
    #[arg(long, value_name = "PATH", conflicts_with = "store_url")]
    pub store: Option<PathBuf>,

    /// Base URL of a REST document store
    #[arg(long, value_name = "URL")]
    pub store_url: Option<String>,

    /// Collection holding the question records
    #[arg(long, value_name = "NAME")]
    pub collection: Option<String>,

    /// Append a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub session_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
