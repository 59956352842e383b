use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext};

use cl_core::ports::SystemClipboardPort;

/// Write side of the real system clipboard.
///
/// A fresh context is opened per write: the underlying handle is not
/// thread-safe on every platform and copy actions are rare, user-driven
/// events.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboardPort for SystemClipboard {
    fn write_text(&self, value: &str) -> Result<()> {
        let ctx = ClipboardContext::new().map_err(|e| anyhow!("clipboard unavailable: {e}"))?;
        ctx.set_text(value.to_string())
            .map_err(|e| anyhow!("clipboard write failed: {e}"))?;
        tracing::debug!(len = value.len(), "wrote text to system clipboard");
        Ok(())
    }
}
