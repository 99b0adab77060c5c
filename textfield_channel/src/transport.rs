//! Line-delimited JSON transport and the channel-backed sink.
//!
//! Each method call is one line of JSON. The sink side never blocks the
//! editing operations: calls are queued on a channel and a writer thread
//! drains them to the output stream.

use crate::messages::{self, invalid_data, MethodCall};
use crossbeam_channel::{Receiver, Sender};
use std::io::{self, BufRead, Write};
use std::thread;
use textfield_core::{ClientId, EditingState, InputAction, PresentationSink};

/// Presentation sink that queues encoded method calls on a channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<MethodCall>,
}

impl ChannelSink {
    /// Wraps an existing sender.
    pub fn new(tx: Sender<MethodCall>) -> Self {
        Self { tx }
    }

    /// Creates a sink together with the receiving end of its channel.
    pub fn unbounded() -> (Self, Receiver<MethodCall>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }

    fn send(&self, call: MethodCall) {
        if let Err(e) = self.tx.send(call) {
            log::warn!("Dropping {}: receiver disconnected", e.0.method);
        }
    }
}

impl PresentationSink for ChannelSink {
    fn update_editing_state(&mut self, client_id: ClientId, state: &EditingState) {
        self.send(messages::update_editing_state_call(client_id, state));
    }

    fn perform_action(&mut self, client_id: ClientId, action: InputAction) {
        self.send(messages::perform_action_call(client_id, action));
    }
}

/// Writes one call as a single JSON line.
pub fn write_call<W: Write>(writer: &mut W, call: &MethodCall) -> io::Result<()> {
    let content = serde_json::to_string(call)?;
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::trace!("Sent: {}", content);
    Ok(())
}

/// Reads the next call. Returns `Ok(None)` at end of input; blank lines are
/// skipped.
pub fn read_call<R: BufRead>(reader: &mut R) -> io::Result<Option<MethodCall>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            break;
        }
    }

    log::trace!("Received: {}", line.trim_end());
    parse_call(&line).map(Some)
}

/// Decodes one JSON method call.
pub fn parse_call(line: &str) -> io::Result<MethodCall> {
    serde_json::from_str(line.trim()).map_err(|e| invalid_data(format!("Invalid JSON: {}", e)))
}

/// Spawns a thread that writes every queued call to `writer` until all
/// senders are dropped.
pub fn spawn_writer<W>(
    rx: Receiver<MethodCall>,
    mut writer: W,
) -> thread::JoinHandle<io::Result<()>>
where
    W: Write + Send + 'static,
{
    thread::spawn(move || {
        for call in rx.iter() {
            write_call(&mut writer, &call)?;
        }
        log::debug!("Presentation channel closed");
        Ok(())
    })
}
