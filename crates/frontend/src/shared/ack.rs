//! Self-hiding acknowledgment flags ("Copied!", "Submitted Successfully!")

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::any::Any;

/// Runs `callback` once after `delay_ms`. Dropping the returned handle
/// cancels the callback if it has not fired yet.
pub type Schedule = fn(delay_ms: u32, callback: Box<dyn FnOnce()>) -> Box<dyn Any>;

/// Browser scheduler backed by `setTimeout`.
pub fn browser_timeout(delay_ms: u32, callback: Box<dyn FnOnce()>) -> Box<dyn Any> {
    // Dropping a gloo Timeout clears it.
    Box::new(Timeout::new(delay_ms, callback))
}

/// A boolean that turns itself off after a fixed delay.
///
/// The pending timer belongs to the owner that created the flag: it is
/// cancelled when that owner is cleaned up, so it never writes to a
/// disposed signal. Showing the flag again restarts the delay.
#[derive(Clone, Copy)]
pub struct Acknowledgement {
    visible: RwSignal<bool>,
    // Timer handles are not Send+Sync, store locally
    pending: StoredValue<Option<Box<dyn Any>>, LocalStorage>,
    delay_ms: u32,
    schedule: Schedule,
}

impl Acknowledgement {
    pub fn new(delay_ms: u32) -> Self {
        Self::with_schedule(delay_ms, browser_timeout)
    }

    pub fn with_schedule(delay_ms: u32, schedule: Schedule) -> Self {
        let visible = RwSignal::new(false);
        let pending = StoredValue::new_local(None::<Box<dyn Any>>);

        on_cleanup(move || {
            pending.try_update_value(|slot| slot.take());
        });

        Self {
            visible,
            pending,
            delay_ms,
            schedule,
        }
    }

    pub fn show(&self) {
        let visible = self.visible;
        visible.set(true);

        let handle = (self.schedule)(self.delay_ms, Box::new(move || visible.set(false)));
        // Replacing the slot drops (and cancels) an earlier timer.
        self.pending.update_value(|slot| {
            slot.replace(handle);
        });
    }

    /// Reactive read.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}
