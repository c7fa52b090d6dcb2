use crate::shared::theme::use_theme;
use form_contracts::form::SelectControl;
use leptos::prelude::*;

/// Single-choice dropdown, one `<option>` per normalized option.
#[component]
pub fn Select(control: SelectControl) -> impl IntoView {
    let theme = use_theme();

    view! {
        <select
            id=control.id
            name=control.name
            class=move || theme.class("input-field")
            required=control.required
        >
            {control
                .options
                .into_iter()
                .map(|option| view! { <option value=option.value>{option.label}</option> })
                .collect_view()}
        </select>
    }
}
