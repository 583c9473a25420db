//! Bridge layer: the stateful context object and its environment seams.
//!
//! ```text
//! component code
//!     │  set_component_ready / set_frame_height / set_component_value
//!     ▼
//! ComponentBridge ──post_message──► MessageChannel ──► host
//!     ▲        │
//!     │        └── inject_theme ──► Document (head <style>)
//!     │
//! host ──on_message_event──► decode ──► EventBus ──► subscribers
//! ```

pub mod channel;
pub mod component;
pub mod document;
pub mod style;

pub use channel::{LineChannel, MemoryChannel, MessageChannel};
pub use component::{BridgeState, ComponentBridge, Readiness};
pub use document::{Document, MemoryDocument, StyleElement};
pub use style::{INJECTED_STYLE_ELEMENT_ID, inject_theme, theme_css};
