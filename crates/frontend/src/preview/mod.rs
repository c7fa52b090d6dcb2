//! Live form preview.
//!
//! Renders the current schema value as a real, uncontrolled HTML form plus
//! the theme toggle and copy button. The theme and both acknowledgment flags
//! live as long as the preview itself, so editing the schema does not reset
//! them. The form is only rebuilt when the planned controls change.

mod field;
mod file_field;

pub use field::FieldView;
pub use file_field::FileField;

use crate::shared::ack::Acknowledgement;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::ui::Button;
use crate::shared::theme::{provide_theme, ThemeToggle};
use form_contracts::form::FormPlan;
use form_contracts::schema::format_schema;
use form_contracts::PreviewConfig;
use leptos::prelude::*;
use serde_json::Value;

pub const NO_SCHEMA_MESSAGE: &str = "Please load a schema to preview.";
pub const NO_FIELDS_MESSAGE: &str = "No fields available to display.";

#[component]
pub fn FormPreview(
    /// Last decoded schema, `None` when nothing valid is loaded
    #[prop(into)]
    schema: Signal<Option<Value>>,
) -> impl IntoView {
    let config = use_context::<PreviewConfig>().unwrap_or_default();
    let theme = provide_theme(config.theme_storage_key);
    let copied = Acknowledgement::new(config.copy_ack_ms);
    let submitted = Acknowledgement::new(config.submit_ack_ms);

    // Copies the schema as displayed, not what the user typed into the form.
    let handle_copy = Callback::new(move |_: leptos::ev::MouseEvent| {
        let Some(value) = schema.get_untracked() else {
            return;
        };
        match format_schema(&value) {
            Ok(text) => {
                copy_to_clipboard(&text);
                copied.show();
            }
            Err(err) => log::error!("{}", err),
        }
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        // No backend: acknowledge instead of navigating.
        ev.prevent_default();
        submitted.show();
    };

    // Edits that leave the plan unchanged (whitespace, key order) keep the
    // rendered form, including typed values and file previews.
    let plan = Memo::new(move |_| {
        schema
            .get()
            .and_then(|value| FormPlan::from_value(&value, &config))
    });

    move || {
        let Some(plan) = plan.get() else {
            return view! { <p class="form-preview__placeholder">{NO_SCHEMA_MESSAGE}</p> }
                .into_any();
        };

        view! {
            <div class=move || theme.class("form-preview-container")>
                <div class="form-preview__toolbar">
                    <ThemeToggle />
                    <Button base_class="copy-json-button" on_click=handle_copy>
                        {move || copy_caption(copied.is_visible())}
                    </Button>
                </div>

                <h2 class="form-title">{plan.title.clone()}</h2>
                <p class="form-description">{plan.description.clone()}</p>

                <Show when=move || submitted.is_visible()>
                    <p class="form-preview__success">"Submitted Successfully!"</p>
                </Show>

                <form on:submit=handle_submit>
                    {form_body(plan)}
                </form>
            </div>
        }
        .into_any()
    }
}

fn form_body(plan: FormPlan) -> AnyView {
    if plan.is_empty() {
        return view! { <p class="form-preview__empty">{NO_FIELDS_MESSAGE}</p> }.into_any();
    }

    view! {
        {plan
            .fields
            .into_iter()
            .map(|field| view! { <FieldView plan=field /> })
            .collect_view()}
        <Button base_class="submit-button" button_type="submit">
            "Submit"
        </Button>
    }
    .into_any()
}

pub fn copy_caption(copied: bool) -> &'static str {
    if copied {
        "Copied!"
    } else {
        "Copy Form JSON"
    }
}
