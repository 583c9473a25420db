//! Domain layer: render events, theme tokens and the event bus.
//!
//! These types are what the component's own rendering code sees. They are
//! independent of the wire format, which lives in [`crate::protocol`].

pub mod event_bus;
pub mod render_event;
pub mod theme;

pub use event_bus::EventBus;
pub use render_event::RenderEvent;
pub use theme::ThemeDescriptor;
