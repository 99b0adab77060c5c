//! Method-call messages exchanged with the presentation host.
//!
//! Calls use the JSON method codec shape `{"method": ..., "args": ...}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use textfield_core::state::NO_COMPOSING;
use textfield_core::{
    ClientId, EditingState, FieldConfig, InputAction, InputSession, PresentationSink, TextAffinity,
};

/// Outbound: the field's state changed.
pub const UPDATE_EDITING_STATE: &str = "TextInputClient.updateEditingState";
/// Outbound: the field was submitted.
pub const PERFORM_ACTION: &str = "TextInputClient.performAction";

/// Inbound: a field gained focus.
pub const SET_CLIENT: &str = "TextInput.setClient";
/// Inbound: the focused field went away.
pub const CLEAR_CLIENT: &str = "TextInput.clearClient";
/// Inbound: the host changed the text or selection itself.
pub const SET_EDITING_STATE: &str = "TextInput.setEditingState";
pub const SHOW: &str = "TextInput.show";
pub const HIDE: &str = "TextInput.hide";

const AFFINITY_PREFIX: &str = "TextAffinity.";
const ACTION_PREFIX: &str = "TextInputAction.";

/// A single method call in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: &str, args: Value) -> Self {
        Self {
            method: method.to_string(),
            args,
        }
    }
}

/// Wire form of an editing state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingStateArgs {
    pub text: String,
    pub selection_base: i64,
    pub selection_extent: i64,
    #[serde(default = "default_affinity")]
    pub selection_affinity: String,
    #[serde(default)]
    pub selection_is_directional: bool,
    #[serde(default = "no_composing")]
    pub composing_base: i64,
    #[serde(default = "no_composing")]
    pub composing_extent: i64,
}

fn default_affinity() -> String {
    affinity_name(TextAffinity::Downstream)
}

fn no_composing() -> i64 {
    NO_COMPOSING
}

impl From<&EditingState> for EditingStateArgs {
    fn from(state: &EditingState) -> Self {
        Self {
            text: state.text.clone(),
            selection_base: state.selection_base as i64,
            selection_extent: state.selection_extent as i64,
            selection_affinity: affinity_name(state.selection_affinity),
            selection_is_directional: state.selection_is_directional,
            composing_base: state.composing_base,
            composing_extent: state.composing_extent,
        }
    }
}

impl EditingStateArgs {
    /// Selection endpoints as buffer positions. The host uses -1 for "no
    /// selection", which maps to the start of the field.
    pub fn selection(&self) -> (usize, usize) {
        let to_pos = |v: i64| usize::try_from(v).unwrap_or(0);
        (to_pos(self.selection_base), to_pos(self.selection_extent))
    }
}

/// Configuration object sent along with `setClient`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_action: Option<String>,
}

pub fn affinity_name(affinity: TextAffinity) -> String {
    format!("{}{}", AFFINITY_PREFIX, affinity.as_str())
}

pub fn action_name(action: InputAction) -> String {
    format!("{}{}", ACTION_PREFIX, action.as_str())
}

/// Parses `TextInputAction.<name>`; the bare `<name>` is accepted too.
pub fn parse_action_name(name: &str) -> io::Result<InputAction> {
    let bare = name.strip_prefix(ACTION_PREFIX).unwrap_or(name);
    bare.parse().map_err(|e| invalid_data(format!("{}", e)))
}

/// Builds the `updateEditingState` call for a snapshot.
pub fn update_editing_state_call(client_id: ClientId, state: &EditingState) -> MethodCall {
    let args = serde_json::json!([client_id, EditingStateArgs::from(state)]);
    MethodCall::new(UPDATE_EDITING_STATE, args)
}

/// Builds the `performAction` call.
pub fn perform_action_call(client_id: ClientId, action: InputAction) -> MethodCall {
    MethodCall::new(PERFORM_ACTION, serde_json::json!([client_id, action_name(action)]))
}

pub(crate) fn invalid_data(message: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}

/// Requests from the host that drive the session lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
    SetClient(FieldConfig),
    ClearClient,
    SetEditingState(EditingStateArgs),
    Show,
    Hide,
}

impl HostRequest {
    /// Decodes an inbound method call.
    pub fn from_call(call: &MethodCall) -> io::Result<Self> {
        match call.method.as_str() {
            SET_CLIENT => {
                let (client_id, config): (ClientId, ClientConfigArgs) =
                    serde_json::from_value(call.args.clone())
                        .map_err(|e| invalid_data(format!("Invalid setClient args: {}", e)))?;
                let mut field_config = FieldConfig::new(client_id);
                if let Some(name) = config.input_action.as_deref() {
                    field_config = field_config.with_input_action(parse_action_name(name)?);
                }
                Ok(HostRequest::SetClient(field_config))
            }
            CLEAR_CLIENT => Ok(HostRequest::ClearClient),
            SET_EDITING_STATE => serde_json::from_value(call.args.clone())
                .map(HostRequest::SetEditingState)
                .map_err(|e| invalid_data(format!("Invalid setEditingState args: {}", e))),
            SHOW => Ok(HostRequest::Show),
            HIDE => Ok(HostRequest::Hide),
            other => Err(invalid_data(format!("Unknown method: {}", other))),
        }
    }

    /// Applies the request to a session.
    pub fn apply<S: PresentationSink + Clone>(&self, session: &mut InputSession<S>) {
        match self {
            HostRequest::SetClient(config) => session.set_client(*config),
            HostRequest::ClearClient => {
                session.clear_client();
            }
            HostRequest::SetEditingState(args) => {
                let (base, extent) = args.selection();
                session.set_editing_state(&args.text, base, extent);
            }
            HostRequest::Show => session.set_visible(true),
            HostRequest::Hide => session.set_visible(false),
        }
    }
}
