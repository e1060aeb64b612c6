//! Display formatting of option default values.

use serde_json::Value;

use crate::style::{Palette, Tone};

/// Formats a value for display inside a `Default:` hint.
///
/// Strings are quoted and numbers, booleans and null are printed as
/// literals. Arrays and objects are formatted element by element in an
/// inspect style rather than as JSON: object keys are not quoted.
///
/// ```rust
/// use helpsmith::{format_value, Palette};
/// use serde_json::json;
///
/// let plain = Palette::plain();
/// assert_eq!(format_value(&json!(0), &plain), "0");
/// assert_eq!(format_value(&json!("eu-west-1"), &plain), "\"eu-west-1\"");
/// assert_eq!(format_value(&json!([1, "a"]), &plain), "[1, \"a\"]");
/// ```
pub fn format_value(value: &Value, palette: &Palette) -> String {
    match value {
        Value::String(_) => palette.paint(Tone::Text, &value.to_string()),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            palette.paint(Tone::Literal, &value.to_string())
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(|v| format_value(v, palette)).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, v)| format!("{key}: {}", format_value(v, palette)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
    }
}
