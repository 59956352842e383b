//! Tauri-managed state shared across commands.

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide dark-mode toggle. Presentation-only; injected into the
/// webview at startup and flipped by the header toggle.
#[derive(Default)]
pub struct ThemeState {
    dark: AtomicBool,
}

impl ThemeState {
    pub fn set_dark(&self, enabled: bool) {
        self.dark.store(enabled, Ordering::Relaxed);
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }
}
