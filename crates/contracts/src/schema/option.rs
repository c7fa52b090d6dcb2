//! Choice options for select / radio / checkbox fields

use serde::Deserialize;
use serde_json::Value;

/// Normalized option: what the control submits and what the user reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Accepted wire shapes of an option entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionEntry {
    Plain(String),
    Labeled { value: String, label: String },
}

/// Resolve one raw `options` entry.
///
/// A bare string becomes `value = label = string`. An object needs non-empty
/// string `value` and `label`; extra keys are ignored. Every other shape
/// yields `None` and the entry is skipped by the caller.
pub fn normalize_option(raw: &Value) -> Option<ChoiceOption> {
    // Derived struct deserializers also accept sequences; only objects count.
    if !(raw.is_string() || raw.is_object()) {
        return None;
    }
    match OptionEntry::deserialize(raw).ok()? {
        OptionEntry::Plain(text) => Some(ChoiceOption {
            value: text.clone(),
            label: text,
        }),
        OptionEntry::Labeled { value, label } if !value.is_empty() && !label.is_empty() => {
            Some(ChoiceOption { value, label })
        }
        OptionEntry::Labeled { .. } => None,
    }
}
