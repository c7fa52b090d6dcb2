//! Light/dark preference of the preview pane.
//!
//! Persistence goes through [`ThemeStore`] so the rendering code never knows
//! where the flag lives (localStorage in the browser, memory in tests).

/// Rendering theme of the preview.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Name used in CSS modifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Caption of the button that switches away from this theme.
    pub fn toggle_caption(&self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark Mode",
            Self::Dark => "Switch to Light Mode",
        }
    }

    /// Parse the stored text literal. Only `"true"` means dark; a missing
    /// or unexpected value falls back to light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        Self::from_dark(raw == Some("true"))
    }

    /// Text literal written to storage.
    pub fn stored_value(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// Persistent home of the dark-mode flag.
pub trait ThemeStore {
    fn read(&self) -> bool;
    fn write(&self, dark: bool);
}

/// Theme shown on first display.
pub fn load_theme(store: &impl ThemeStore) -> ThemeMode {
    ThemeMode::from_dark(store.read())
}

/// Flip the theme and persist the result.
pub fn toggle_theme(store: &impl ThemeStore, current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    store.write(next.is_dark());
    log::info!("preview theme switched to {}", next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MemoryStore {
        dark: Cell<bool>,
        writes: Cell<usize>,
    }

    impl ThemeStore for MemoryStore {
        fn read(&self) -> bool {
            self.dark.get()
        }

        fn write(&self, dark: bool) {
            self.dark.set(dark);
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn test_default_is_light() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists_and_reload_reflects_it() {
        let store = MemoryStore::default();
        let theme = load_theme(&store);

        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, ThemeMode::Dark);
        assert_eq!(load_theme(&store), ThemeMode::Dark);

        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, ThemeMode::Light);
        assert_eq!(load_theme(&store), ThemeMode::Light);
        assert_eq!(store.writes.get(), 2);
    }

    #[test]
    fn test_stored_literals() {
        assert_eq!(ThemeMode::from_stored(Some("true")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("false")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("TRUE")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.stored_value(), "true");
        assert_eq!(ThemeMode::Light.stored_value(), "false");
    }

    #[test]
    fn test_toggle_caption() {
        assert_eq!(ThemeMode::Light.toggle_caption(), "Switch to Dark Mode");
        assert_eq!(ThemeMode::Dark.toggle_caption(), "Switch to Light Mode");
    }
}
