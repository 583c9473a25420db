//! Theme style injection.
//!
//! The host's theme tokens are mapped onto CSS custom properties in a
//! single `<style>` element in the document head. The element is created
//! on first use and fully rewritten on every later injection.

use super::document::Document;
use crate::domain::ThemeDescriptor;

/// Id of the singleton style element holding the injected theme.
pub const INJECTED_STYLE_ELEMENT_ID: &str = "__streamlit_injected_styles";

/// Renders the stylesheet for `theme`.
#[must_use]
pub fn theme_css(theme: &ThemeDescriptor) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in theme.css_variables() {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str(concat!(
        "}\n\n",
        "body {\n",
        "  background-color: var(--background-color);\n",
        "  color: var(--text-color);\n",
        "}\n",
    ));
    css
}

/// Writes `theme` into the injected style element, creating it if absent.
pub fn inject_theme<D: Document + ?Sized>(document: &mut D, theme: &ThemeDescriptor) {
    if !document.has_element(INJECTED_STYLE_ELEMENT_ID) {
        tracing::debug!(id = INJECTED_STYLE_ELEMENT_ID, "creating theme style element");
        document.append_head_style(INJECTED_STYLE_ELEMENT_ID);
    }
    if !document.set_inner_html(INJECTED_STYLE_ELEMENT_ID, &theme_css(theme)) {
        tracing::warn!(
            id = INJECTED_STYLE_ELEMENT_ID,
            "theme style element missing after creation; theme not applied"
        );
    }
}
