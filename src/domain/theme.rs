//! Theme tokens sent by the host alongside render events.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Flat record of color and font tokens used for style injection.
///
/// Wire names are camelCase. Tokens decode leniently so a theme object is
/// never rejected: a missing or `null` token becomes an empty string and
/// any other non-string value is kept as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeDescriptor {
    /// Accent color (`--primary-color`).
    #[serde(deserialize_with = "lenient_token")]
    pub primary_color: String,
    /// Page background (`--background-color`).
    #[serde(deserialize_with = "lenient_token")]
    pub background_color: String,
    /// Background for secondary surfaces (`--secondary-background-color`).
    #[serde(deserialize_with = "lenient_token")]
    pub secondary_background_color: String,
    /// Body text color (`--text-color`).
    #[serde(deserialize_with = "lenient_token")]
    pub text_color: String,
    /// Font family (`--font`).
    #[serde(deserialize_with = "lenient_token")]
    pub font: String,
}

impl ThemeDescriptor {
    /// Returns `(custom property, value)` pairs in stylesheet order.
    #[must_use]
    pub fn css_variables(&self) -> [(&'static str, &str); 5] {
        [
            ("--primary-color", self.primary_color.as_str()),
            ("--background-color", self.background_color.as_str()),
            (
                "--secondary-background-color",
                self.secondary_background_color.as_str(),
            ),
            ("--text-color", self.text_color.as_str()),
            ("--font", self.font.as_str()),
        ]
    }
}

fn lenient_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let value = serde_json::json!({
            "primaryColor": "#ff4b4b",
            "backgroundColor": "#ffffff",
            "secondaryBackgroundColor": "#f0f2f6",
            "textColor": "#31333f",
            "font": "sans serif"
        });
        let Ok(theme) = serde_json::from_value::<ThemeDescriptor>(value) else {
            panic!("theme should decode");
        };
        assert_eq!(theme.primary_color, "#ff4b4b");
        assert_eq!(theme.secondary_background_color, "#f0f2f6");
        assert_eq!(theme.font, "sans serif");
    }

    #[test]
    fn missing_tokens_default_to_empty() {
        let Ok(theme) =
            serde_json::from_value::<ThemeDescriptor>(serde_json::json!({"textColor": "#eee"}))
        else {
            panic!("partial theme should decode");
        };
        assert_eq!(theme.text_color, "#eee");
        assert!(theme.primary_color.is_empty());
        assert!(theme.font.is_empty());
    }

    #[test]
    fn non_string_tokens_are_tolerated() {
        let value = serde_json::json!({
            "primaryColor": "#fff",
            "backgroundColor": 0,
            "textColor": true,
            "font": null
        });
        let Ok(theme) = serde_json::from_value::<ThemeDescriptor>(value) else {
            panic!("theme with non-string tokens should decode");
        };
        assert_eq!(theme.primary_color, "#fff");
        assert_eq!(theme.background_color, "0");
        assert_eq!(theme.text_color, "true");
        assert!(theme.font.is_empty());
        assert!(theme.secondary_background_color.is_empty());
    }

    #[test]
    fn css_variables_keep_order() {
        let theme = ThemeDescriptor {
            primary_color: "a".to_string(),
            background_color: "b".to_string(),
            secondary_background_color: "c".to_string(),
            text_color: "d".to_string(),
            font: "e".to_string(),
        };
        let names: Vec<&str> = theme.css_variables().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "--primary-color",
                "--background-color",
                "--secondary-background-color",
                "--text-color",
                "--font"
            ]
        );
    }
}
