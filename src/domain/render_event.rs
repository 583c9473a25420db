//! Typed render events republished to the component's own rendering code.

use serde::Serialize;
use serde_json::{Map, Value};

use super::ThemeDescriptor;

/// Render event delivered to subscribers whenever the host sends
/// `streamlit:render`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEvent {
    /// Whether the host wants the component rendered as disabled.
    pub disabled: bool,
    /// Named arguments the host passed to the component.
    pub args: Map<String, Value>,
    /// Theme in effect on the host, if it sent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeDescriptor>,
}

impl RenderEvent {
    /// Returns the argument with the given name, if present.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }
}

/// Coerces a JSON value to a boolean the way the host's scripting
/// environment does: `null`, `false`, `0`, `NaN` and `""` are false,
/// everything else (including empty arrays and objects) is true.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
