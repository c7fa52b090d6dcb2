//! Target-independent core of the form previewer.
//!
//! Everything here is plain Rust with no browser dependencies, so the whole
//! schema-to-form pipeline can be exercised with `cargo test` on the host:
//!
//! ```text
//! raw text --decode--> serde_json::Value --narrow--> FormSchema --plan--> FormPlan
//! ```
//!
//! The frontend crate only turns a [`form::FormPlan`] into DOM nodes.

pub mod config;
pub mod error;
pub mod form;
pub mod schema;
pub mod theme;

pub use config::PreviewConfig;
pub use error::SchemaError;
