//! Capability interfaces the domain depends on.
//!
//! Adapters live in cl-platform (real devices) and cl-tauri (webview
//! payloads); tests use in-memory fakes.

mod clock;
mod payload_source;
mod system_clipboard;

pub use clock::ClockPort;
pub use payload_source::{PayloadFileMeta, PayloadSourcePort};
pub use system_clipboard::SystemClipboardPort;
