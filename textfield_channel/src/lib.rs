//! Textfield Channel - Wire protocol between a field and its presentation host.
//!
//! Outbound events are encoded as JSON method calls and queued on a channel;
//! inbound host requests are decoded and applied to an [`InputSession`].
//!
//! [`InputSession`]: textfield_core::InputSession

pub mod messages;
pub mod transport;

pub use messages::{EditingStateArgs, HostRequest, MethodCall};
pub use transport::{parse_call, read_call, spawn_writer, write_call, ChannelSink};
