//! The component-side bridge context.
//!
//! [`ComponentBridge`] owns everything the component needs to talk to its
//! host: the channel, the document, the render [`EventBus`] and a small
//! [`BridgeState`]. There is no ambient global state; whoever manages the
//! component's lifecycle creates one bridge and keeps it.
//!
//! All methods take `&mut self` and never block. The host's event loop is
//! expected to deliver inbound messages one at a time, in channel order.

use serde::Serialize;
use serde_json::Value;
use super::channel::MessageChannel;
use super::document::Document;
use super::style::inject_theme;
use crate::domain::event_bus::RenderReceiver;
use crate::domain::{EventBus, RenderEvent};
use crate::error::BridgeError;
use crate::protocol::{InboundMessage, OutboundMessage};

/// Handshake state of a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// No listener registered and nothing sent yet.
    NotReady,
    /// Listener registered and readiness announced at least once.
    Ready,
}

/// Mutable bridge state.
///
/// `listener_registered` only ever goes from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeState {
    listener_registered: bool,
    last_frame_height: Option<u32>,
}

impl BridgeState {
    /// Returns `true` once the inbound listener has been registered.
    #[must_use]
    pub const fn listener_registered(&self) -> bool {
        self.listener_registered
    }

    /// Last height sent to the host, if any.
    #[must_use]
    pub const fn last_frame_height(&self) -> Option<u32> {
        self.last_frame_height
    }

    /// Current handshake state.
    #[must_use]
    pub const fn readiness(&self) -> Readiness {
        if self.listener_registered {
            Readiness::Ready
        } else {
            Readiness::NotReady
        }
    }
}

/// Component side of the messaging bridge.
#[derive(Debug)]
pub struct ComponentBridge<C, D> {
    channel: C,
    document: D,
    events: EventBus,
    state: BridgeState,
}

impl<C: MessageChannel, D: Document> ComponentBridge<C, D> {
    /// Creates a bridge in the `NotReady` state with no render subscribers.
    #[must_use]
    pub fn new(channel: C, document: D) -> Self {
        Self {
            channel,
            document,
            events: EventBus::new(),
            state: BridgeState::default(),
        }
    }

    /// Tells the host the component is ready to receive render events.
    ///
    /// The first call registers the inbound listener; every call sends
    /// `streamlit:componentReady` again.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel fails to post the message.
    pub fn set_component_ready(&mut self) -> Result<(), BridgeError> {
        if !self.state.listener_registered {
            self.channel.add_message_listener();
            self.state.listener_registered = true;
            tracing::debug!("registered inbound message listener");
        }
        self.send_back_msg(OutboundMessage::ready())
    }

    /// Reports the component's height to the host.
    ///
    /// `None` measures the document body. Nothing is sent when the height
    /// equals the last one reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel fails to post the message.
    pub fn set_frame_height(&mut self, height: Option<u32>) -> Result<(), BridgeError> {
        let height = height.unwrap_or_else(|| self.document.scroll_height());
        if self.state.last_frame_height == Some(height) {
            tracing::trace!(height, "frame height unchanged");
            return Ok(());
        }
        self.state.last_frame_height = Some(height);
        self.send_back_msg(OutboundMessage::SetFrameHeight { height })
    }

    /// Sends a new widget value to the host.
    ///
    /// The value is converted to JSON here, at the send boundary, and is
    /// otherwise passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Serialization`] if the value cannot be
    /// represented as JSON, or a channel error if the post fails.
    pub fn set_component_value<V: Serialize + ?Sized>(
        &mut self,
        value: &V,
    ) -> Result<(), BridgeError> {
        let value = serde_json::to_value(value)?;
        self.send_back_msg(OutboundMessage::value(value))
    }

    /// Handles one message delivered by the host.
    ///
    /// Render messages inject their theme (if any), are published on the
    /// event bus and returned. Anything else, and anything delivered
    /// before the listener was registered, yields `None`.
    pub fn on_message_event(&mut self, data: &Value) -> Option<RenderEvent> {
        if !self.state.listener_registered {
            tracing::trace!("message arrived before listener registration; dropped");
            return None;
        }

        match InboundMessage::decode(data) {
            InboundMessage::Render(event) => {
                if let Some(theme) = &event.theme {
                    inject_theme(&mut self.document, theme);
                }
                let receivers = self.events.publish(&event);
                tracing::debug!(
                    disabled = event.disabled,
                    args = event.args.len(),
                    themed = event.theme.is_some(),
                    receivers,
                    "dispatched render event"
                );
                Some(event)
            }
            InboundMessage::Ignored(kind) => {
                tracing::trace!(?kind, "ignoring message");
                None
            }
        }
    }

    /// Subscribes to render events.
    ///
    /// The receiver queues every event published after this call, in
    /// delivery order, until it is dropped.
    #[must_use]
    pub fn subscribe(&mut self) -> RenderReceiver {
        self.events.subscribe()
    }

    /// Returns the render event bus.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> BridgeState {
        self.state
    }

    /// Returns the channel.
    #[must_use]
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Returns the channel mutably.
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Returns the document.
    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// Returns the document mutably.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    fn send_back_msg(&mut self, message: OutboundMessage) -> Result<(), BridgeError> {
        let kind = message.message_type();
        let payload = message.into_envelope().to_value()?;
        self.channel.post_message(&payload)?;
        tracing::debug!(%kind, "posted message to host");
        Ok(())
    }
}
