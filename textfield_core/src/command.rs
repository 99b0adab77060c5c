//! Abstract editing commands and their dispatch.

use crate::action::InputAction;
use crate::field::TextField;
use crate::sink::PresentationSink;
use std::str::FromStr;
use thiserror::Error;

/// One inbound command, as produced by whatever decodes key and IME events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    // Text input
    InsertText(String),

    // Cursor movement
    MoveHome,
    MoveEnd,
    MoveLeft,
    MoveRight,
    MoveLeftWord,
    MoveRightWord,
    MoveLeftReset,
    MoveRightReset,

    // Selection
    MoveHomeSelect,
    MoveEndSelect,
    MoveLeftLine,
    MoveRightLine,
    SelectAll,
    RemoveSelectedText,

    // Deletion
    DeleteForwardChar,
    DeleteForwardWord,
    DeleteToLineEnd,
    BackspaceChar,
    BackspaceWord,
    BackspaceToLineStart,

    // Actions
    Submit,
    PerformAction(InputAction),
}

/// Error returned when a command line or action name is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown input action '{0}'")]
    UnknownAction(String),

    #[error("command '{0}' needs an argument")]
    MissingArgument(&'static str),
}

impl EditCommand {
    /// The kebab-case name used by the line syntax.
    pub fn name(&self) -> &'static str {
        match self {
            EditCommand::InsertText(_) => "insert",
            EditCommand::MoveHome => "move-home",
            EditCommand::MoveEnd => "move-end",
            EditCommand::MoveLeft => "move-left",
            EditCommand::MoveRight => "move-right",
            EditCommand::MoveLeftWord => "move-left-word",
            EditCommand::MoveRightWord => "move-right-word",
            EditCommand::MoveLeftReset => "move-left-reset",
            EditCommand::MoveRightReset => "move-right-reset",
            EditCommand::MoveHomeSelect => "move-home-select",
            EditCommand::MoveEndSelect => "move-end-select",
            EditCommand::MoveLeftLine => "move-left-line",
            EditCommand::MoveRightLine => "move-right-line",
            EditCommand::SelectAll => "select-all",
            EditCommand::RemoveSelectedText => "remove-selected",
            EditCommand::DeleteForwardChar => "delete-char",
            EditCommand::DeleteForwardWord => "delete-word",
            EditCommand::DeleteToLineEnd => "delete-line",
            EditCommand::BackspaceChar => "backspace-char",
            EditCommand::BackspaceWord => "backspace-word",
            EditCommand::BackspaceToLineStart => "backspace-line",
            EditCommand::Submit => "submit",
            EditCommand::PerformAction(_) => "action",
        }
    }
}

/// Parses `name [argument]`. The argument of `insert` is everything after
/// the first space, so inserted text may itself contain spaces.
impl FromStr for EditCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (name, arg) = match line.split_once(' ') {
            Some((name, arg)) => (name, Some(arg)),
            None => (line, None),
        };

        let command = match name {
            "" => return Err(ParseCommandError::Empty),
            "insert" => EditCommand::InsertText(
                arg.ok_or(ParseCommandError::MissingArgument("insert"))?
                    .to_string(),
            ),
            "move-home" => EditCommand::MoveHome,
            "move-end" => EditCommand::MoveEnd,
            "move-left" => EditCommand::MoveLeft,
            "move-right" => EditCommand::MoveRight,
            "move-left-word" => EditCommand::MoveLeftWord,
            "move-right-word" => EditCommand::MoveRightWord,
            "move-left-reset" => EditCommand::MoveLeftReset,
            "move-right-reset" => EditCommand::MoveRightReset,
            "move-home-select" => EditCommand::MoveHomeSelect,
            "move-end-select" => EditCommand::MoveEndSelect,
            "move-left-line" => EditCommand::MoveLeftLine,
            "move-right-line" => EditCommand::MoveRightLine,
            "select-all" => EditCommand::SelectAll,
            "remove-selected" => EditCommand::RemoveSelectedText,
            "delete-char" => EditCommand::DeleteForwardChar,
            "delete-word" => EditCommand::DeleteForwardWord,
            "delete-line" => EditCommand::DeleteToLineEnd,
            "backspace-char" => EditCommand::BackspaceChar,
            "backspace-word" => EditCommand::BackspaceWord,
            "backspace-line" => EditCommand::BackspaceToLineStart,
            "submit" => EditCommand::Submit,
            "action" => EditCommand::PerformAction(
                arg.ok_or(ParseCommandError::MissingArgument("action"))?
                    .trim()
                    .parse::<InputAction>()?,
            ),
            other => return Err(ParseCommandError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

impl<S: PresentationSink> TextField<S> {
    /// Runs one command against the field.
    ///
    /// Returns true if the command emitted an editing-state event.
    pub fn apply(&mut self, command: &EditCommand) -> bool {
        let before = self.revision();
        log::trace!("client {}: {}", self.client_id(), command.name());

        match command {
            EditCommand::InsertText(text) => self.insert_text(text),
            EditCommand::MoveHome => self.move_home(),
            EditCommand::MoveEnd => self.move_end(),
            EditCommand::MoveLeft => self.move_left(),
            EditCommand::MoveRight => self.move_right(),
            EditCommand::MoveLeftWord => self.move_left_word(),
            EditCommand::MoveRightWord => self.move_right_word(),
            EditCommand::MoveLeftReset => self.move_left_reset(),
            EditCommand::MoveRightReset => self.move_right_reset(),
            EditCommand::MoveHomeSelect => self.move_home_select(),
            EditCommand::MoveEndSelect => self.move_end_select(),
            EditCommand::MoveLeftLine => self.move_left_line(),
            EditCommand::MoveRightLine => self.move_right_line(),
            EditCommand::SelectAll => self.select_all(),
            EditCommand::RemoveSelectedText => {
                self.remove_selected_text();
            }
            EditCommand::DeleteForwardChar => self.delete_forward_char(),
            EditCommand::DeleteForwardWord => self.delete_forward_word(),
            EditCommand::DeleteToLineEnd => self.delete_to_line_end(),
            EditCommand::BackspaceChar => self.backspace_char(),
            EditCommand::BackspaceWord => self.backspace_word(),
            EditCommand::BackspaceToLineStart => self.backspace_to_line_start(),
            EditCommand::Submit => self.submit(),
            EditCommand::PerformAction(action) => self.perform_action(*action),
        }

        self.revision() != before
    }
}
