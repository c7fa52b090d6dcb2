use crate::shared::theme::use_theme;
use form_contracts::form::TextAreaControl;
use leptos::prelude::*;

/// Multi-line native input.
#[component]
pub fn Textarea(control: TextAreaControl) -> impl IntoView {
    let theme = use_theme();

    view! {
        <textarea
            id=control.id.clone()
            name=control.id
            class=move || theme.class("input-field")
            placeholder=control.placeholder
            required=control.required
            rows=4
        />
    }
}
