use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use cl_core::ports::SystemClipboardPort;

use crate::indicator::CopiedIndicator;

/// Use case for the per-field copy affordance.
///
/// Responsibilities:
/// - Write the field's string value to the system clipboard
/// - Light the "copied" indicator for the field and schedule its clear
///
/// The delayed clear presents the generation it was armed with, so a copy
/// that lands before the timer fires simply supersedes it.
pub struct CopyField {
    clipboard: Arc<dyn SystemClipboardPort>,
    indicator: Arc<CopiedIndicator>,
    indicator_ttl: Duration,
}

impl CopyField {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        indicator: Arc<CopiedIndicator>,
        indicator_ttl_ms: u64,
    ) -> Self {
        Self {
            clipboard,
            indicator,
            indicator_ttl: Duration::from_millis(indicator_ttl_ms),
        }
    }

    pub async fn execute(&self, field_key: &str, value: &str) -> Result<()> {
        self.clipboard
            .write_text(value)
            .context("clipboard write failed")?;

        let generation = self.indicator.mark(field_key).await;
        tracing::debug!(field_key, generation, "field copied");

        let indicator = Arc::clone(&self.indicator);
        let ttl = self.indicator_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            indicator.clear_if_current(generation).await;
        });

        Ok(())
    }
}
