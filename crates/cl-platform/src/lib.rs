//! Platform-specific implementations of the cl-core ports.

pub mod clipboard;
pub mod time;

pub use clipboard::SystemClipboard;
pub use time::SystemClock;
