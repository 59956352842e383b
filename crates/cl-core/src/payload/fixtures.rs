//! Test fixtures and helper fakes for payload tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::ids::SnapshotId;
use crate::payload::{PayloadItem, Snapshot};
use crate::ports::{ClockPort, PayloadFileMeta, PayloadSourcePort};

/// Clock that always reports the same instant.
pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Synthetic in-memory payload source, built up fluently in tests.
#[derive(Default)]
pub struct StaticPayload {
    formats: Vec<(String, String)>,
    files: Vec<PayloadFileMeta>,
    fail_on: Option<String>,
}

impl StaticPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: &str, text: &str) -> Self {
        self.formats.push((format.to_string(), text.to_string()));
        self
    }

    pub fn with_file(mut self, meta: PayloadFileMeta) -> Self {
        self.files.push(meta);
        self
    }

    /// Make `read_text` fail for the given format.
    pub fn failing_on(mut self, format: &str) -> Self {
        self.fail_on = Some(format.to_string());
        self
    }
}

#[async_trait]
impl PayloadSourcePort for StaticPayload {
    fn formats(&self) -> Vec<String> {
        self.formats.iter().map(|(f, _)| f.clone()).collect()
    }

    async fn read_text(&self, format: &str) -> Result<String> {
        if self.fail_on.as_deref() == Some(format) {
            return Err(anyhow!("synthetic read failure for {format}"));
        }
        self.formats
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| anyhow!("format not present: {format}"))
    }

    fn files(&self) -> Vec<PayloadFileMeta> {
        self.files.clone()
    }
}

/// Minimal snapshot with the given items and zeroed counters.
pub fn snapshot_with_items(items: Vec<PayloadItem>) -> Snapshot {
    Snapshot {
        id: SnapshotId::new(),
        captured_at_ms: 0,
        distinct_format_count: items.iter().filter(|i| !i.is_file_entry).count(),
        entry_count: items.iter().filter(|i| !i.is_file_entry).count(),
        file_count: items.iter().filter(|i| i.is_file_entry).count(),
        items,
    }
}

/// Snapshot distinguishable by its capture time, for history ordering tests.
pub fn snapshot_at(captured_at_ms: i64) -> Snapshot {
    Snapshot {
        id: SnapshotId::new(),
        captured_at_ms,
        distinct_format_count: 1,
        entry_count: 1,
        file_count: 0,
        items: vec![PayloadItem::inline(
            "text/plain".into(),
            format!("payload {captured_at_ms}"),
        )],
    }
}
