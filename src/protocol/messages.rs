//! Message types: outbound envelope, outbound kinds, inbound decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::render_event::is_truthy;
use crate::domain::{RenderEvent, ThemeDescriptor};
use crate::error::BridgeError;

/// Component API version announced in `streamlit:componentReady`.
pub const API_VERSION: u32 = 1;

/// Discriminant of the only inbound message kind.
pub const RENDER_EVENT: &str = "streamlit:render";

/// Discriminator for component → host messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentMessageType {
    /// The component can receive render events. The host withholds them
    /// until it sees this.
    ComponentReady,
    /// The component has a new widget value.
    SetComponentValue,
    /// The component's iframe needs a new height.
    SetFrameHeight,
}

impl ComponentMessageType {
    /// Returns the wire discriminant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComponentReady => "streamlit:componentReady",
            Self::SetComponentValue => "streamlit:setComponentValue",
            Self::SetFrameHeight => "streamlit:setFrameHeight",
        }
    }
}

impl std::fmt::Display for ComponentMessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared encoding of a component value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Plain JSON value.
    #[default]
    Json,
}

/// Typed component → host message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    /// Readiness handshake.
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady {
        /// Protocol version, always [`API_VERSION`].
        api_version: u32,
    },

    /// New widget value.
    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue {
        /// The value, already converted to JSON.
        value: Value,
        /// Encoding tag, always `"json"`.
        data_type: DataType,
    },

    /// New iframe height in pixels.
    #[serde(rename = "streamlit:setFrameHeight")]
    SetFrameHeight {
        /// Height in CSS pixels.
        height: u32,
    },
}

impl OutboundMessage {
    /// Builds the readiness message for the current API version.
    #[must_use]
    pub const fn ready() -> Self {
        Self::ComponentReady {
            api_version: API_VERSION,
        }
    }

    /// Builds a JSON value update.
    #[must_use]
    pub fn value(value: Value) -> Self {
        Self::SetComponentValue {
            value,
            data_type: DataType::Json,
        }
    }

    /// Returns the discriminator of this message.
    #[must_use]
    pub const fn message_type(&self) -> ComponentMessageType {
        match self {
            Self::ComponentReady { .. } => ComponentMessageType::ComponentReady,
            Self::SetComponentValue { .. } => ComponentMessageType::SetComponentValue,
            Self::SetFrameHeight { .. } => ComponentMessageType::SetFrameHeight,
        }
    }

    /// Wraps the message in its wire envelope.
    #[must_use]
    pub fn into_envelope(self) -> OutboundEnvelope {
        OutboundEnvelope {
            is_streamlit_message: true,
            message: self,
        }
    }
}

/// Wire form of an [`OutboundMessage`]:
/// `{ "isStreamlitMessage": true, "type": ..., <fields> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEnvelope {
    /// Marks the payload as belonging to this protocol.
    pub is_streamlit_message: bool,
    /// The tagged message body, flattened beside the marker.
    #[serde(flatten)]
    pub message: OutboundMessage,
}

impl OutboundEnvelope {
    /// Converts the envelope into the JSON object that goes on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Serialization`] if serde_json rejects the
    /// payload.
    pub fn to_value(&self) -> Result<Value, BridgeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decodes a payload posted by a component, as a host would.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MalformedMessage`] if the payload is not
    /// marked as a protocol message or its `type` is not a known
    /// component message kind.
    pub fn from_value(value: Value) -> Result<Self, BridgeError> {
        let marked = value
            .get("isStreamlitMessage")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !marked {
            return Err(BridgeError::MalformedMessage(
                "missing isStreamlitMessage marker".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| BridgeError::MalformedMessage(e.to_string()))
    }
}

/// Host → component message after discriminant validation.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// A render event, with malformed fields already defaulted.
    Render(RenderEvent),
    /// A message whose `type` is missing, not a string, or not a kind this
    /// bridge understands. Carries the discriminant when there was one.
    Ignored(Option<String>),
}

impl InboundMessage {
    /// Decodes an inbound payload.
    ///
    /// The `type` discriminant is checked first; only `streamlit:render`
    /// payloads are decoded further. Decoding never fails: a missing or
    /// non-object `args` becomes an empty map (logged at error level), a
    /// falsy or non-object `theme` becomes `None`.
    #[must_use]
    pub fn decode(data: &Value) -> Self {
        match data.get("type").and_then(Value::as_str) {
            Some(RENDER_EVENT) => Self::Render(decode_render(data)),
            Some(other) => Self::Ignored(Some(other.to_string())),
            None => Self::Ignored(None),
        }
    }

    /// Parses raw JSON text and decodes it.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MalformedMessage`] if the text is not JSON.
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        let data: Value =
            serde_json::from_str(raw).map_err(|e| BridgeError::MalformedMessage(e.to_string()))?;
        Ok(Self::decode(&data))
    }
}

fn decode_render(data: &Value) -> RenderEvent {
    let args = match data.get("args") {
        Some(Value::Object(map)) => map.clone(),
        None | Some(Value::Null) => {
            tracing::error!("got null args in render message; this should never happen");
            Map::new()
        }
        Some(other) => {
            tracing::error!(args = %other, "render message args is not an object");
            Map::new()
        }
    };

    let disabled = data.get("disabled").is_some_and(is_truthy);

    let theme = match data.get("theme") {
        Some(value) if value.is_object() => {
            match serde_json::from_value::<ThemeDescriptor>(value.clone()) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!(error = %e, "render message theme could not be decoded");
                    None
                }
            }
        }
        Some(value) if is_truthy(value) => {
            tracing::warn!(theme = %value, "render message theme is not an object");
            None
        }
        _ => None,
    };

    RenderEvent {
        disabled,
        args,
        theme,
    }
}
