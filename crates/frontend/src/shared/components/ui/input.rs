use crate::shared::theme::use_theme;
use form_contracts::form::InputControl;
use leptos::prelude::*;

/// Single-line native input (text, email, password, tel).
///
/// Uncontrolled: the browser owns the typed value, only the attributes come
/// from the schema.
#[component]
pub fn Input(control: InputControl) -> impl IntoView {
    let theme = use_theme();
    let InputControl {
        id,
        input_type,
        placeholder,
        required,
        pattern,
        title,
    } = control;

    view! {
        <input
            id=id.clone()
            name=id
            class=move || theme.class("input-field")
            type=input_type
            placeholder=placeholder
            required=required
            pattern=pattern
            title=title
        />
    }
}
