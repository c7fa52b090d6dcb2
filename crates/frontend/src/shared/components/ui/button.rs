use crate::shared::theme::use_theme;
use leptos::prelude::*;

/// Themed button. `base_class` picks the look ("copy-json-button",
/// "submit-button", ...), the theme adds its modifier.
#[component]
pub fn Button(
    /// Base CSS class
    #[prop(into)]
    base_class: String,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || theme.class(&base_class)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
