//! Format constraint attached to `tel` fields

use serde_json::Value;

/// `validation` block of a field.
///
/// Both parts are optional on the wire; a missing part simply leaves the
/// corresponding HTML attribute off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValidation {
    /// Regex text for the native `pattern` attribute.
    pub pattern: Option<String>,
    /// Hint shown by the browser when the pattern is violated.
    pub message: Option<String>,
}

impl FieldValidation {
    /// Narrow a raw `validation` value. Non-objects yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            pattern: map.get("pattern").and_then(Value::as_str).map(str::to_string),
            message: map.get("message").and_then(Value::as_str).map(str::to_string),
        })
    }
}
