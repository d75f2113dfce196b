//! Form commands typed at the prompt.

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Any non-command line: the new input for the current question
    Answer(String),
    /// "Back"
    Back,
    /// "Continue"
    Next,
    /// "Submit Answers": open the confirmation panel
    Submit,
    /// "Submit" on the confirmation panel
    Confirm,
    /// "Cancel" on the confirmation panel
    Cancel,
    /// Re-render the current question
    Show,
    Help,
    Quit,
}

impl FormCommand {
    /// Classify a trimmed input line.
    ///
    /// Lines starting with `:` are commands; a leading `::` escapes a literal
    /// colon in an answer. Unknown commands are returned as `Err` with the
    /// offending text.
    pub fn parse(line: &str) -> Result<Self, String> {
        if let Some(escaped) = line.strip_prefix("::") {
            return Ok(FormCommand::Answer(format!(":{}", escaped)));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(FormCommand::Answer(line.to_string()));
        };

        match command.trim().to_ascii_lowercase().as_str() {
            "back" | "b" => Ok(FormCommand::Back),
            "next" | "continue" | "n" => Ok(FormCommand::Next),
            "submit" | "s" => Ok(FormCommand::Submit),
            "yes" | "y" | "confirm" => Ok(FormCommand::Confirm),
            "cancel" | "c" => Ok(FormCommand::Cancel),
            "show" => Ok(FormCommand::Show),
            "help" | "h" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" | "q" => Ok(FormCommand::Quit),
            _ => Err(line.to_string()),
        }
    }
}

/// Help text listing the commands.
pub const HELP: &str = "\
Commands:
  <text>            answer the current question
  N=<text>          fill sub-field N of a multi-field question
  :next, :n         continue to the next question
  :back, :b         go back one question (clears the answer you are leaving)
  :submit, :s       review your answers (last question only)
  :yes, :y          confirm and submit
  :cancel, :c       close the review panel
  :show             show the current question again
  :help, :h, :?     show this help
  :quit, :q         leave without submitting
  ::text            answer with text that starts with ':'";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_answer() {
        assert_eq!(
            FormCommand::parse("hello"),
            Ok(FormCommand::Answer("hello".to_string()))
        );
        assert_eq!(FormCommand::parse(""), Ok(FormCommand::Answer(String::new())));
    }

    #[test]
    fn test_commands_and_aliases() {
        assert_eq!(FormCommand::parse(":back"), Ok(FormCommand::Back));
        assert_eq!(FormCommand::parse(":N"), Ok(FormCommand::Next));
        assert_eq!(FormCommand::parse(":submit"), Ok(FormCommand::Submit));
        assert_eq!(FormCommand::parse(":y"), Ok(FormCommand::Confirm));
        assert_eq!(FormCommand::parse(":cancel"), Ok(FormCommand::Cancel));
        assert_eq!(FormCommand::parse(":q"), Ok(FormCommand::Quit));
    }

    #[test]
    fn test_escaped_colon() {
        assert_eq!(
            FormCommand::parse("::-)"),
            Ok(FormCommand::Answer(":-)".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(FormCommand::parse(":jump"), Err(":jump".to_string()));
    }
}
