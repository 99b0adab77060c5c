//! Input actions reported to the host when a field is submitted.

use crate::command::ParseCommandError;
use std::fmt;
use std::str::FromStr;

/// The closed set of actions a host can configure for a field.
///
/// The core never interprets these; it only forwards the configured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputAction {
    None,
    Unspecified,
    #[default]
    Done,
    Go,
    Search,
    Send,
    Next,
    Previous,
    ContinueAction,
    Join,
    Route,
    EmergencyCall,
    Newline,
}

impl InputAction {
    pub const ALL: [InputAction; 13] = [
        InputAction::None,
        InputAction::Unspecified,
        InputAction::Done,
        InputAction::Go,
        InputAction::Search,
        InputAction::Send,
        InputAction::Next,
        InputAction::Previous,
        InputAction::ContinueAction,
        InputAction::Join,
        InputAction::Route,
        InputAction::EmergencyCall,
        InputAction::Newline,
    ];

    /// The symbolic name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputAction::None => "none",
            InputAction::Unspecified => "unspecified",
            InputAction::Done => "done",
            InputAction::Go => "go",
            InputAction::Search => "search",
            InputAction::Send => "send",
            InputAction::Next => "next",
            InputAction::Previous => "previous",
            InputAction::ContinueAction => "continueAction",
            InputAction::Join => "join",
            InputAction::Route => "route",
            InputAction::EmergencyCall => "emergencyCall",
            InputAction::Newline => "newline",
        }
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputAction {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputAction::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseCommandError::UnknownAction(s.to_string()))
    }
}
