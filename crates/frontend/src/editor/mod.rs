//! JSON text editor for the schema.
//!
//! Every input event decodes the whole text and reports the result upward:
//! the decoded value on success, `None` on failure. Decode errors stop here
//! and are only shown inline.

use form_contracts::schema::{decode_schema_text, reformat_schema_text};
use leptos::prelude::*;
use serde_json::Value;

/// What the editor reports for one version of its text.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOutcome {
    /// Handed to `on_schema_change`.
    pub schema: Option<Value>,
    /// Inline error message, if any.
    pub error: Option<String>,
}

pub fn evaluate(text: &str) -> EditorOutcome {
    match decode_schema_text(text) {
        Ok(value) => EditorOutcome {
            schema: Some(value),
            error: None,
        },
        Err(err) => {
            if let Some((line, column)) = err.position() {
                log::debug!("schema text does not decode (line {}, column {})", line, column);
            }
            EditorOutcome {
                schema: None,
                error: Some(err.to_string()),
            }
        }
    }
}

#[component]
pub fn SchemaEditor(
    /// Receives the decoded value, or `None` when the text is invalid
    on_schema_change: Callback<Option<Value>>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);

    let apply = move |raw: String| {
        let outcome = evaluate(&raw);
        text.set(raw);
        set_error.set(outcome.error);
        on_schema_change.run(outcome.schema);
    };

    let handle_input = move |ev: leptos::ev::Event| apply(event_target_value(&ev));

    let on_format = move |_| match reformat_schema_text(&text.get_untracked()) {
        Ok(formatted) => apply(formatted),
        Err(err) => log::debug!("format skipped: {}", err),
    };

    view! {
        <div class="json-editor">
            <div class="json-editor__toolbar">
                <button
                    type="button"
                    class="json-editor__format"
                    on:click=on_format
                    disabled=move || error.get().is_some() || text.get().trim().is_empty()
                >
                    "Format"
                </button>
            </div>

            <textarea
                class="json-editor__textarea"
                placeholder="Enter JSON here..."
                spellcheck="false"
                autocomplete="off"
                prop:value=move || text.get()
                on:input=handle_input
            />

            {move || error.get().map(|message| view! {
                <p class="json-editor__error">{message}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_text_reports_value_without_error() {
        let outcome = evaluate(r#"{"formTitle": "A", "fields": []}"#);
        assert_eq!(outcome.schema, Some(json!({"formTitle": "A", "fields": []})));
        assert_eq!(outcome.error, None);
    }

    #[test]
    fn test_valid_but_shapeless_text_is_still_reported() {
        let outcome = evaluate(r#"{"no": "fields"}"#);
        assert!(outcome.schema.is_some());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_invalid_text_reports_none_with_message() {
        for text in ["", "{", r#"{"fields": [}"#] {
            let outcome = evaluate(text);
            assert_eq!(outcome.schema, None);
            assert_eq!(outcome.error.as_deref(), Some("Invalid JSON"));
        }
    }
}
