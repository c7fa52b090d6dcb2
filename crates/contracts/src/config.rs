//! Compile-time tunables of the previewer.
//!
//! There is no runtime configuration source (no env, no CLI); the frontend
//! provides one `PreviewConfig` through Leptos context at the root.

/// localStorage key holding the dark-mode flag as `"true"` / `"false"`.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// How long the "Copied!" acknowledgment stays visible.
pub const COPY_ACK_MS: u32 = 2_000;

/// How long the "Submitted Successfully!" acknowledgment stays visible.
pub const SUBMIT_ACK_MS: u32 = 3_000;

/// `accept` filter for file fields that do not specify one.
pub const DEFAULT_FILE_ACCEPT: &str = "image/*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    pub theme_storage_key: &'static str,
    pub copy_ack_ms: u32,
    pub submit_ack_ms: u32,
    pub default_file_accept: &'static str,
}

impl PreviewConfig {
    pub const fn new() -> Self {
        Self {
            theme_storage_key: DARK_MODE_STORAGE_KEY,
            copy_ack_ms: COPY_ACK_MS,
            submit_ack_ms: SUBMIT_ACK_MS,
            default_file_accept: DEFAULT_FILE_ACCEPT,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self::new()
    }
}
