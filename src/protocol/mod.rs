//! Wire protocol: outbound component messages and inbound host messages.
//!
//! Every payload is a JSON object discriminated by its `type` field.
//! Outbound payloads additionally carry `isStreamlitMessage: true` so the
//! host can tell them apart from unrelated cross-document traffic.

pub mod messages;

pub use messages::{
    API_VERSION, ComponentMessageType, DataType, InboundMessage, OutboundEnvelope,
    OutboundMessage, RENDER_EVENT,
};
