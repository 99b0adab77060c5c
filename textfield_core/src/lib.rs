//! Textfield Core - Single-field editing state machine.
//!
//! This crate holds the text, the base/extent selection and every editing
//! command of one focused input field. It knows nothing about rendering or
//! transport; state changes are reported through a [`PresentationSink`].

pub mod action;
pub mod buffer;
pub mod command;
pub mod config;
pub mod field;
pub mod selection;
pub mod session;
pub mod sink;
pub mod state;
pub mod word;

pub use action::InputAction;
pub use buffer::TextBuffer;
pub use command::{EditCommand, ParseCommandError};
pub use config::FieldConfig;
pub use field::TextField;
pub use selection::Selection;
pub use session::InputSession;
pub use sink::{ClientId, PresentationSink, RecordingSink, SinkEvent};
pub use state::{EditingState, TextAffinity};
pub use word::{word_boundary_backward, word_boundary_forward};
