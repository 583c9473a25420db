//! Bridge error types with stable numeric codes.
//!
//! [`BridgeError`] is the central error type for the bridge. Recoverable
//! protocol anomalies (missing `args`, a theme that is not an object) are
//! logged and never surface here; only failures the caller has to act on
//! are returned.

/// Bridge error enum with numeric code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category      |
/// |-----------|---------------|
/// | 1000–1999 | Payload shape |
/// | 3000–3999 | Environment   |
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A payload failed a shape check.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// An outbound value could not be represented as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The message channel refused the post.
    #[error("channel error: {0}")]
    Channel(String),

    /// I/O failure on a line-oriented channel.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BridgeError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MalformedMessage(_) => 1001,
            Self::Serialization(_) => 1002,
            Self::Channel(_) => 3001,
            Self::Io(_) => 3002,
            Self::Config(_) => 3003,
        }
    }

    /// Returns `true` if the failure came from the payload rather than
    /// the environment.
    #[must_use]
    pub const fn is_payload_error(&self) -> bool {
        matches!(self, Self::MalformedMessage(_) | Self::Serialization(_))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_ranges() {
        assert_eq!(BridgeError::MalformedMessage(String::new()).error_code(), 1001);
        assert_eq!(BridgeError::Channel("closed".to_string()).error_code(), 3001);
        assert_eq!(BridgeError::Config("x".to_string()).error_code(), 3003);
    }

    #[test]
    fn serde_errors_convert() {
        let Err(err) = serde_json::from_str::<serde_json::Value>("{") else {
            panic!("truncated JSON must fail to parse");
        };
        let bridge: BridgeError = err.into();
        assert_eq!(bridge.error_code(), 1002);
        assert!(bridge.is_payload_error());
    }

    #[test]
    fn io_errors_are_environment_errors() {
        let err = BridgeError::from(std::io::Error::other("pipe closed"));
        assert!(!err.is_payload_error());
        assert!(err.to_string().contains("pipe closed"));
    }
}
