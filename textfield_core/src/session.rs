//! Focus-session lifecycle: at most one live field at a time.

use crate::command::EditCommand;
use crate::config::FieldConfig;
use crate::field::TextField;
use crate::sink::{ClientId, PresentationSink};

/// Owns the field that currently has focus, if any.
///
/// A field is created fresh on every focus gain and dropped on focus loss;
/// nothing carries over from one client to the next.
#[derive(Debug)]
pub struct InputSession<S: PresentationSink + Clone> {
    /// Sink handed to each new field.
    sink: S,
    /// The focused field.
    field: Option<TextField<S>>,
    /// Whether the host asked for the input surface to be shown.
    visible: bool,
}

impl<S: PresentationSink + Clone> InputSession<S> {
    /// Creates a session with no focused field.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            field: None,
            visible: false,
        }
    }

    /// Starts editing for a new client, discarding any previous field.
    pub fn set_client(&mut self, config: FieldConfig) {
        if let Some(old) = self.field.as_ref() {
            log::debug!(
                "Replacing client {} with {}",
                old.client_id(),
                config.client_id
            );
        } else {
            log::debug!("Focus gained by client {}", config.client_id);
        }
        self.field = Some(TextField::new(config, self.sink.clone()));
    }

    /// Ends the current session. Returns the client that lost focus.
    pub fn clear_client(&mut self) -> Option<ClientId> {
        let field = self.field.take()?;
        log::debug!("Focus lost by client {}", field.client_id());
        Some(field.client_id())
    }

    /// Returns the client id of the focused field, if any.
    pub fn active_client(&self) -> Option<ClientId> {
        self.field.as_ref().map(|field| field.client_id())
    }

    /// Returns the focused field, if any.
    pub fn field(&self) -> Option<&TextField<S>> {
        self.field.as_ref()
    }

    /// Returns the focused field mutably, if any.
    pub fn field_mut(&mut self) -> Option<&mut TextField<S>> {
        self.field.as_mut()
    }

    /// Returns true if the host asked for the input surface to be shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records a show or hide request from the host.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Applies the host's view of the text and selection to the active field.
    /// Returns false if no client is active.
    pub fn set_editing_state(&mut self, text: &str, base: usize, extent: usize) -> bool {
        match self.field.as_mut() {
            Some(field) => {
                field.set_editing_state(text, base, extent);
                true
            }
            None => {
                log::warn!("Ignoring editing state: no active client");
                false
            }
        }
    }

    /// Routes a command to the active field.
    ///
    /// Returns true if the field emitted an editing-state event. Commands
    /// arriving without an active client are dropped.
    pub fn dispatch(&mut self, command: &EditCommand) -> bool {
        match self.field.as_mut() {
            Some(field) => field.apply(command),
            None => {
                log::warn!("Dropping '{}': no active client", command.name());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::InputAction;
    use crate::sink::{RecordingSink, SinkEvent};

    #[test]
    fn test_commands_without_client_are_dropped() {
        let sink = RecordingSink::new();
        let mut session = InputSession::new(sink.clone());
        assert!(!session.dispatch(&EditCommand::InsertText("x".to_string())));
        assert!(!session.set_editing_state("abc", 0, 0));
        assert!(sink.is_empty());
        assert_eq!(session.clear_client(), None);
    }

    #[test]
    fn test_new_client_starts_fresh() {
        let sink = RecordingSink::new();
        let mut session = InputSession::new(sink.clone());

        session.set_client(FieldConfig::new(1));
        session.dispatch(&EditCommand::InsertText("first".to_string()));
        assert_eq!(session.field().map(|f| f.text()), Some("first".to_string()));

        session.set_client(FieldConfig::new(2));
        assert_eq!(session.active_client(), Some(2));
        assert_eq!(session.field().map(|f| f.text()), Some(String::new()));

        session.dispatch(&EditCommand::InsertText("second".to_string()));
        match &sink.events()[1] {
            SinkEvent::EditingState { client_id, state } => {
                assert_eq!(*client_id, 2);
                assert_eq!(state.text, "second");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_clear_client() {
        let mut session = InputSession::new(RecordingSink::new());
        session.set_client(FieldConfig::new(5));
        assert_eq!(session.clear_client(), Some(5));
        assert_eq!(session.active_client(), None);
        assert!(session.field().is_none());
    }

    #[test]
    fn test_host_state_then_commands() {
        let sink = RecordingSink::new();
        let mut session = InputSession::new(sink.clone());
        session.set_client(FieldConfig::new(3).with_input_action(InputAction::Send));

        assert!(session.set_editing_state("hello", 5, 5));
        assert!(sink.is_empty());

        assert!(session.dispatch(&EditCommand::BackspaceChar));
        assert!(!session.dispatch(&EditCommand::Submit));
        assert_eq!(sink.last_state().map(|s| s.text), Some("hell".to_string()));
        assert_eq!(
            sink.events().last(),
            Some(&SinkEvent::Action {
                client_id: 3,
                action: InputAction::Send
            })
        );
    }

    #[test]
    fn test_field_mut_edits_focused_field() {
        let sink = RecordingSink::new();
        let mut session = InputSession::new(sink.clone());
        assert!(session.field_mut().is_none());

        session.set_client(FieldConfig::new(4));
        if let Some(field) = session.field_mut() {
            field.set_editing_state("hello", 0, 0);
            field.select_all();
        }
        assert_eq!(sink.last_state().map(|s| s.selection_extent), Some(5));
    }

    #[test]
    fn test_visibility() {
        let mut session = InputSession::new(RecordingSink::new());
        assert!(!session.is_visible());
        session.set_visible(true);
        assert!(session.is_visible());
    }
}
