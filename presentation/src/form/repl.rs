//! Interactive form REPL
//!
//! Reads one line at a time, turns it into a [`FormCommand`] and drives the
//! [`SurveyController`]. [`SurveyRepl::handle`] does all the work and returns
//! the text to print, so the loop in [`SurveyRepl::run`] only does I/O.

use super::command::{FormCommand, HELP};
use super::input::parse_answer;
use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{SimpleProgress, SubmitProgressReporter};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use survey_application::{NoProgress, SubmitProgressNotifier, SurveyController};
use tracing::{debug, warn};

const HISTORY_SIZE: usize = 200;

/// Result of handling one command.
#[derive(Debug, Default)]
pub struct Step {
    /// Text to print
    pub output: String,
    /// Leave the form
    pub quit: bool,
}

impl Step {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// Interactive survey form
pub struct SurveyRepl {
    controller: SurveyController,
    show_progress: bool,
    progress_bar: bool,
    history_path: Option<PathBuf>,
}

impl SurveyRepl {
    /// Create a form with line history in the user data directory.
    pub fn new(controller: SurveyController) -> Self {
        Self {
            controller,
            show_progress: true,
            progress_bar: true,
            history_path: dirs::data_dir().map(|p| p.join("survey-form").join("history.txt")),
        }
    }

    /// Set whether to show a progress bar while submitting
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Apply the `[output]` settings. Without color, progress is printed
    /// as plain lines instead of a bar.
    pub fn with_output_config(mut self, config: &OutputConfig) -> Self {
        self.progress_bar = config.color;
        self.with_progress(config.show_progress)
    }

    /// Keep line history in this file, or nowhere
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn controller(&self) -> &SurveyController {
        &self.controller
    }

    /// Load the questions and render the first one.
    pub async fn start(&mut self) -> String {
        match self.controller.load_questions().await {
            Ok(_) => self.render(),
            Err(e) => format!("{} {}\n{}", "x".red(), e.to_string().red(), self.render()),
        }
    }

    fn render(&self) -> String {
        match self.controller.snapshot() {
            Some(state) => ConsoleFormatter::format_session(state),
            None => "Loading...\n".to_string(),
        }
    }

    /// Render after a gesture: the new state, or why nothing changed.
    fn after<E: std::fmt::Display>(&self, result: Result<(), E>) -> Step {
        match result {
            Ok(()) => Step::show(self.render()),
            Err(e) => Step::show(format!("{}\n", e.to_string().yellow())),
        }
    }

    /// Handle one command.
    pub async fn handle(
        &mut self,
        command: FormCommand,
        progress: &dyn SubmitProgressNotifier,
    ) -> Step {
        match command {
            FormCommand::Answer(line) => {
                let Some(question) = self
                    .controller
                    .snapshot()
                    .and_then(|state| state.current_question())
                    .cloned()
                else {
                    return Step::show(self.render());
                };
                let previous = self
                    .controller
                    .snapshot()
                    .and_then(|state| state.current_answer())
                    .cloned();

                match parse_answer(&question, previous.as_ref(), &line) {
                    Ok(value) => {
                        let result = self.controller.record_answer(question.id.clone(), value);
                        self.after(result)
                    }
                    Err(e) => Step::show(format!("{}\n", e.to_string().yellow())),
                }
            }
            FormCommand::Back => {
                let result = self.controller.retreat();
                self.after(result)
            }
            FormCommand::Next => {
                let result = self.controller.advance();
                self.after(result)
            }
            FormCommand::Submit => {
                let result = self.controller.open_confirmation();
                self.after(result)
            }
            FormCommand::Cancel => {
                let result = self.controller.close_confirmation();
                self.after(result)
            }
            FormCommand::Confirm => match self.controller.submit(progress).await {
                Ok(outcome) => Step::show(format!(
                    "{}\n{}",
                    ConsoleFormatter::format_submit_outcome(&outcome),
                    self.render()
                )),
                Err(e) => Step::show(ConsoleFormatter::format_submit_error(&e)),
            },
            FormCommand::Show => Step::show(self.render()),
            FormCommand::Help => Step::show(format!("{}\n", HELP)),
            FormCommand::Quit => Step {
                output: "Bye!\n".to_string(),
                quit: true,
            },
        }
    }

    /// Run the interactive form until the user quits or closes input.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();
        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("survey".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        print!("{}", self.start().await);

        loop {
            let line = match line_editor.read_line(&prompt)? {
                Signal::Success(line) => line,
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            };

            let command = match FormCommand::parse(line.trim()) {
                Ok(command) => command,
                Err(unknown) => {
                    println!("Unknown command: {}", unknown);
                    println!("Type :help for available commands");
                    continue;
                }
            };
            debug!("Command: {:?}", command);

            let step = match (self.show_progress, self.progress_bar) {
                (true, true) => {
                    let progress = SubmitProgressReporter::new();
                    self.handle(command, &progress).await
                }
                (true, false) => self.handle(command, &SimpleProgress).await,
                (false, _) => self.handle(command, &NoProgress).await,
            };

            println!();
            print!("{}", step.output);
            if step.quit {
                break;
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 Survey Form                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type an answer and press Enter. :help lists commands.");
        println!();
    }
}
