use crate::shared::object_url::{ObjectUrl, PreviewSlot};
use form_contracts::form::FileControl;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// File picker with an inline image preview of the chosen file.
///
/// Each field owns at most one object URL. It is revoked before the next one
/// is created and when the field is torn down.
#[component]
pub fn FileField(control: FileControl) -> impl IntoView {
    let preview = PreviewSlot::new();

    let handle_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        preview.release();
        match ObjectUrl::from_file(&file) {
            Ok(url) => {
                log::debug!("previewing '{}' ({} bytes)", file.name(), file.size());
                preview.replace(url);
            }
            Err(err) => log::error!("{}", err),
        }
    };

    view! {
        <div class="file-upload">
            <input
                type="file"
                id=control.id
                name=control.name
                accept=control.accept
                class="file-input"
                required=control.required
                on:change=handle_change
            />
            {move || preview.src().map(|src| view! {
                <div class="image-preview">
                    <img src=src alt="Selected file preview" class="profile-preview" />
                </div>
            })}
        </div>
    }
}
