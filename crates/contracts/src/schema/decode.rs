//! Text <-> value conversion for the editor and the copy button

use crate::error::SchemaError;
use serde_json::Value;

/// Decode editor text as generic JSON. No shape checks happen here.
///
/// Nesting deeper than 128 levels, lone UTF-16 surrogate escapes and numbers
/// outside the `f64` range are rejected like any other syntax error.
pub fn decode_schema_text(text: &str) -> Result<Value, SchemaError> {
    serde_json::from_str(text).map_err(SchemaError::InvalidJson)
}

/// Pretty-print a schema value with two-space indentation.
pub fn format_schema(value: &Value) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(value).map_err(SchemaError::Serialize)
}

/// Re-indent editor text; fails when the text does not decode.
pub fn reformat_schema_text(text: &str) -> Result<String, SchemaError> {
    format_schema(&decode_schema_text(text)?)
}
