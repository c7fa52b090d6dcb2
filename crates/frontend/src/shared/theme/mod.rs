//! Theme management for the preview pane.
//!
//! The light/dark flag is persisted in localStorage through
//! [`LocalStorageThemeStore`] and shared with every rendered control via
//! [`ThemeContext`].

use form_contracts::theme::{load_theme, toggle_theme, ThemeMode, ThemeStore};
use leptos::prelude::*;
use web_sys::{window, Storage};

/// `ThemeStore` backed by `window.localStorage`.
///
/// Storage being unavailable (private mode, sandboxed iframe) reads as light
/// and turns writes into logged no-ops.
pub struct LocalStorageThemeStore {
    key: &'static str,
}

impl LocalStorageThemeStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn read(&self) -> bool {
        let raw = Self::storage().and_then(|storage| storage.get_item(self.key).ok().flatten());
        ThemeMode::from_stored(raw.as_deref()).is_dark()
    }

    fn write(&self, dark: bool) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, theme not saved");
            return;
        };
        let value = ThemeMode::from_dark(dark).stored_value();
        if let Err(e) = storage.set_item(self.key, value) {
            log::warn!("Failed to save theme to localStorage: {:?}", e);
        }
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub mode: RwSignal<ThemeMode>,
    storage_key: &'static str,
}

impl ThemeContext {
    /// Flip the theme and persist it.
    pub fn toggle(&self) {
        let store = LocalStorageThemeStore::new(self.storage_key);
        let next = toggle_theme(&store, self.mode.get_untracked());
        self.mode.set(next);
    }

    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Reactive class string for `base` under the current theme.
    pub fn class(&self, base: &str) -> String {
        themed_class(base, self.mode.get())
    }
}

/// Read the saved theme once and share it with children.
pub fn provide_theme(storage_key: &'static str) -> ThemeContext {
    let initial = load_theme(&LocalStorageThemeStore::new(storage_key));
    let context = ThemeContext {
        mode: RwSignal::new(initial),
        storage_key,
    };
    provide_context(context);
    context
}

/// Share a theme without touching storage.
#[cfg(test)]
pub fn provide_fixed_theme(mode: ThemeMode) -> ThemeContext {
    let context = ThemeContext {
        mode: RwSignal::new(mode),
        storage_key: "test",
    };
    provide_context(context);
    context
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Render inside FormPreview.")
}

/// `"base base--light"` / `"base base--dark"`.
pub fn themed_class(base: &str, mode: ThemeMode) -> String {
    format!("{base} {base}--{}", mode.as_str())
}

/// Light/dark switch button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            type="button"
            class=move || ctx.class("toggle-dark-mode")
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.get().toggle_caption()}
        </button>
    }
}
