pub mod ack;
pub mod clipboard;
pub mod components;
pub mod object_url;
pub mod theme;
