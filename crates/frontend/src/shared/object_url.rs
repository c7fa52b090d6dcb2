//! Owned `blob:` URLs for local file previews

use leptos::prelude::*;
use web_sys::{File, Url};

/// Releases a `blob:` URL.
pub type Revoke = fn(&str);

fn revoke_in_browser(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke object URL {}: {:?}", url, e);
    }
}

/// Object URL that is revoked when dropped.
pub struct ObjectUrl {
    url: String,
    revoke: Revoke,
}

impl ObjectUrl {
    pub fn from_file(file: &File) -> Result<Self, String> {
        Url::create_object_url_with_blob(file)
            .map(|url| Self::with_revoke(url, revoke_in_browser))
            .map_err(|e| format!("Failed to create object URL: {:?}", e))
    }

    pub fn with_revoke(url: String, revoke: Revoke) -> Self {
        Self { url, revoke }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        (self.revoke)(&self.url);
    }
}

/// Holds at most one preview URL for the owner that created it.
///
/// The held URL is revoked by [`PreviewSlot::release`], by the next
/// [`PreviewSlot::replace`], and when the owner is cleaned up.
#[derive(Clone, Copy)]
pub struct PreviewSlot {
    src: RwSignal<Option<String>>,
    // ObjectUrl is not Send+Sync, store locally
    current: StoredValue<Option<ObjectUrl>, LocalStorage>,
}

impl PreviewSlot {
    pub fn new() -> Self {
        let src = RwSignal::new(None::<String>);
        let current = StoredValue::new_local(None::<ObjectUrl>);

        on_cleanup(move || {
            current.try_update_value(|slot| slot.take());
        });

        Self { src, current }
    }

    /// Drop the held URL, if any.
    pub fn release(&self) {
        self.src.set(None);
        self.current.update_value(|slot| {
            slot.take();
        });
    }

    pub fn replace(&self, url: ObjectUrl) {
        self.release();
        self.src.set(Some(url.as_str().to_string()));
        self.current.set_value(Some(url));
    }

    /// Reactive read of the current preview source.
    pub fn src(&self) -> Option<String> {
        self.src.get()
    }
}

impl Default for PreviewSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static REVOKED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    fn record(url: &str) {
        REVOKED.with(|r| r.borrow_mut().push(url.to_string()));
    }

    fn revoked() -> Vec<String> {
        REVOKED.with(|r| r.borrow().clone())
    }

    fn url(name: &str) -> ObjectUrl {
        ObjectUrl::with_revoke(format!("blob:{name}"), record)
    }

    #[test]
    fn test_replace_revokes_previous_url_once() {
        let owner = Owner::new();
        owner.with(|| {
            let slot = PreviewSlot::new();
            slot.replace(url("a"));
            assert!(revoked().is_empty());
            assert_eq!(slot.src.get_untracked().as_deref(), Some("blob:a"));

            slot.replace(url("b"));
            assert_eq!(revoked(), ["blob:a"]);
            assert_eq!(slot.src.get_untracked().as_deref(), Some("blob:b"));
        });
        owner.cleanup();

        assert_eq!(revoked(), ["blob:a", "blob:b"]);
    }

    #[test]
    fn test_release_happens_before_next_url_exists() {
        let owner = Owner::new();
        owner.with(|| {
            let slot = PreviewSlot::new();
            slot.replace(url("first"));

            slot.release();
            assert_eq!(revoked(), ["blob:first"]);
            assert_eq!(slot.src.get_untracked(), None);

            slot.replace(url("second"));
            assert_eq!(revoked(), ["blob:first"]);
        });
        owner.cleanup();

        assert_eq!(revoked(), ["blob:first", "blob:second"]);
    }

    #[test]
    fn test_cleanup_of_empty_slot_revokes_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let slot = PreviewSlot::new();
            slot.release();
        });
        owner.cleanup();

        assert!(revoked().is_empty());
    }
}
