//! Harness configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use crate::error::BridgeError;

/// Top-level bridge configuration.
///
/// Loaded once at startup via [`BridgeConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Body height the harness document reports, in pixels.
    pub body_height: u32,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,

    /// Announce readiness as soon as the harness starts.
    pub auto_ready: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            body_height: 0,
            log_json: false,
            auto_ready: true,
        }
    }
}

impl BridgeConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Config`] if `BRIDGE_BODY_HEIGHT` is set but
    /// is not a non-negative integer.
    pub fn from_env() -> Result<Self, BridgeError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`BridgeConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let body_height = match lookup("BRIDGE_BODY_HEIGHT") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                BridgeError::Config(format!(
                    "BRIDGE_BODY_HEIGHT must be a pixel count, got {raw:?}"
                ))
            })?,
            None => defaults.body_height,
        };

        Ok(Self {
            body_height,
            log_json: parse_bool(lookup("BRIDGE_LOG_JSON"), defaults.log_json),
            auto_ready: parse_bool(lookup("BRIDGE_AUTO_READY"), defaults.auto_ready),
        })
    }
}

/// Parses a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool(raw: Option<String>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
