//! Clipboard utilities for copying text to clipboard
//!
//! Fire-and-forget wrapper over the Web Clipboard API. Failures are logged
//! and never reach the UI.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy text to the system clipboard
///
/// Returns immediately; the write completes in the background.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => log::info!("Copied {} characters to clipboard", text.len()),
            Err(err) => log::error!("Failed to copy: {}", err),
        }
    });
}

async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
