use anyhow::Result;

/// Write side of the system clipboard, used by the per-field copy action.
pub trait SystemClipboardPort: Send + Sync {
    fn write_text(&self, value: &str) -> Result<()>;
}
