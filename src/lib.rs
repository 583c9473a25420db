//! # component-bridge
//!
//! Messaging bridge between an embedded component and the application
//! hosting it across a cross-document boundary.
//!
//! The component announces readiness, reports its frame height and widget
//! value, and receives typed render events (arguments, disabled flag,
//! theme) from the host. Theme tokens are injected into the component's
//! document as CSS custom properties.
//!
//! ## Architecture
//!
//! ```text
//! Component code
//!     │
//!     ├── ComponentBridge (bridge/)
//!     │       ├── MessageChannel ── host
//!     │       ├── Document (style injection, body height)
//!     │       └── EventBus (domain/) ── render subscribers
//!     │
//!     └── Wire messages (protocol/)
//! ```

pub mod bridge;
pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;

#[cfg(test)]
mod test_support;

pub use bridge::ComponentBridge;
pub use error::BridgeError;
