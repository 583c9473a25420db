//! Cross-document message channel.
//!
//! [`MessageChannel`] is the postMessage-equivalent seam between the
//! component and its host. Posting is fire-and-forget: no acknowledgment,
//! no retry, ordering is whatever the channel provides.

use std::io::Write;

use serde_json::Value;

use crate::error::BridgeError;

/// Transport to the hosting application.
pub trait MessageChannel {
    /// Starts delivering host messages to the component.
    ///
    /// Called at most once per bridge, the first time readiness is
    /// announced.
    fn add_message_listener(&mut self);

    /// Posts one payload to the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel cannot carry the payload.
    fn post_message(&mut self, payload: &Value) -> Result<(), BridgeError>;
}

/// Channel that writes each payload as one line of JSON.
///
/// Used by the stdio harness, where the host reads component messages from
/// the process's standard output.
#[derive(Debug)]
pub struct LineChannel<W> {
    writer: W,
    listening: bool,
}

impl<W: Write> LineChannel<W> {
    /// Creates a channel writing to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            listening: false,
        }
    }

    /// Returns `true` once the listener has been registered.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageChannel for LineChannel<W> {
    fn add_message_listener(&mut self) {
        tracing::debug!("line channel listening for host messages");
        self.listening = true;
    }

    fn post_message(&mut self, payload: &Value) -> Result<(), BridgeError> {
        serde_json::to_writer(&mut self.writer, payload)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory channel that records every post and listener registration.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    posted: Vec<Value>,
    listener_registrations: usize,
}

impl MemoryChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads posted so far, oldest first.
    #[must_use]
    pub fn posted(&self) -> &[Value] {
        &self.posted
    }

    /// Drains and returns the recorded payloads.
    pub fn take_posted(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.posted)
    }

    /// Number of times a listener was registered.
    #[must_use]
    pub const fn listener_registrations(&self) -> usize {
        self.listener_registrations
    }
}

impl MessageChannel for MemoryChannel {
    fn add_message_listener(&mut self) {
        self.listener_registrations += 1;
    }

    fn post_message(&mut self, payload: &Value) -> Result<(), BridgeError> {
        self.posted.push(payload.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_channel_writes_one_line_per_post() {
        let mut channel = LineChannel::new(Vec::new());
        assert!(channel.post_message(&json!({"a": 1})).is_ok());
        assert!(channel.post_message(&json!({"b": 2})).is_ok());

        let Ok(text) = String::from_utf8(channel.into_inner()) else {
            panic!("output should be utf-8");
        };
        assert_eq!(text, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn line_channel_tracks_listener() {
        let mut channel = LineChannel::new(Vec::new());
        assert!(!channel.is_listening());
        channel.add_message_listener();
        assert!(channel.is_listening());
    }

    #[test]
    fn memory_channel_records_posts() {
        let mut channel = MemoryChannel::new();
        channel.add_message_listener();
        assert!(channel.post_message(&json!(1)).is_ok());
        assert_eq!(channel.listener_registrations(), 1);
        assert_eq!(channel.posted(), [json!(1)]);
        assert_eq!(channel.take_posted(), vec![json!(1)]);
        assert!(channel.posted().is_empty());
    }
}
