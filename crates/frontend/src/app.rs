use crate::editor::SchemaEditor;
use crate::layout::SplitScreen;
use crate::preview::FormPreview;
use form_contracts::PreviewConfig;
use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn App() -> impl IntoView {
    // Tunables for every component below.
    provide_context(PreviewConfig::default());

    // Last successfully decoded schema; `None` on load and after a decode failure.
    let schema = RwSignal::new(None::<Value>);

    let on_schema_change = Callback::new(move |decoded: Option<Value>| {
        schema.set(decoded);
    });

    view! {
        <SplitScreen
            left=move || view! { <SchemaEditor on_schema_change=on_schema_change /> }.into_any()
            right=move || view! { <FormPreview schema=schema /> }.into_any()
        />
    }
}
