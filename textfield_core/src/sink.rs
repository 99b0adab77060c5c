//! The presentation sink: where a field reports its state.

use crate::action::InputAction;
use crate::state::EditingState;
use std::cell::RefCell;
use std::rc::Rc;

/// Identifier the host assigned to the field's input session.
pub type ClientId = i64;

/// Receiver of synchronization and action events.
///
/// Implementations must not fail back into the editing operations; a sink
/// that cannot deliver an event should log and drop it.
pub trait PresentationSink {
    /// Called after every operation that changed the buffer or selection.
    fn update_editing_state(&mut self, client_id: ClientId, state: &EditingState);

    /// Called when the field is submitted or an action is requested.
    fn perform_action(&mut self, client_id: ClientId, action: InputAction);
}

/// One event as seen by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    EditingState {
        client_id: ClientId,
        state: EditingState,
    },
    Action {
        client_id: ClientId,
        action: InputAction,
    },
}

/// A sink that keeps every event in memory.
///
/// Clones share the same event log, so a copy handed to a field can be
/// inspected from outside.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all events recorded so far.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// The most recent editing state, if any was reported.
    pub fn last_state(&self) -> Option<EditingState> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            SinkEvent::EditingState { state, .. } => Some(state.clone()),
            SinkEvent::Action { .. } => None,
        })
    }

    /// Drops all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl PresentationSink for RecordingSink {
    fn update_editing_state(&mut self, client_id: ClientId, state: &EditingState) {
        self.events.borrow_mut().push(SinkEvent::EditingState {
            client_id,
            state: state.clone(),
        });
    }

    fn perform_action(&mut self, client_id: ClientId, action: InputAction) {
        self.events
            .borrow_mut()
            .push(SinkEvent::Action { client_id, action });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_log() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();
        handle.update_editing_state(7, &EditingState::new("a".to_string(), 1, 1));
        handle.perform_action(7, InputAction::Search);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last_state().map(|s| s.text), Some("a".to_string()));
        assert_eq!(
            sink.events()[1],
            SinkEvent::Action {
                client_id: 7,
                action: InputAction::Search
            }
        );

        sink.clear();
        assert!(handle.is_empty());
    }
}
