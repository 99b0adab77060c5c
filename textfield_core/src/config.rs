//! Per-field configuration supplied by the host when a field gains focus.

use crate::action::InputAction;
use crate::sink::ClientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// Session identifier echoed on every outbound event.
    pub client_id: ClientId,
    /// Action reported when the field is submitted.
    pub input_action: InputAction,
}

impl FieldConfig {
    /// Creates a configuration with the default `done` action.
    pub fn new(client_id: ClientId) -> Self {
        Self {
            client_id,
            input_action: InputAction::default(),
        }
    }

    pub fn with_input_action(mut self, input_action: InputAction) -> Self {
        self.input_action = input_action;
        self
    }
}
