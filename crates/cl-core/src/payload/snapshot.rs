use serde::{Deserialize, Serialize};

use crate::ids::SnapshotId;
use crate::payload::PayloadItem;

/// One complete, immutable inspection result produced from a single payload.
///
/// `items` preserves encounter order: all inline data entries first, in the
/// order their formats were reported, then all file entries in index order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: SnapshotId,

    /// Capture time in unix epoch milliseconds.
    pub captured_at_ms: i64,

    /// Number of format identifiers the payload reported.
    pub distinct_format_count: usize,

    /// Also the number of format identifiers. Counted separately from
    /// `distinct_format_count` and never diverging from it; both fields are
    /// part of the observable summary, so the redundancy stays.
    pub entry_count: usize,

    /// Number of file entries.
    pub file_count: usize,

    pub items: Vec<PayloadItem>,
}

impl Snapshot {
    /// True when the payload carried neither formats nor files. The display
    /// layer treats this as "no detailed information available", not as an
    /// error.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inline data entries, in format-report order.
    pub fn inline_items(&self) -> impl Iterator<Item = &PayloadItem> {
        self.items.iter().filter(|i| !i.is_file_entry)
    }

    /// File entries, in index order.
    pub fn file_items(&self) -> impl Iterator<Item = &PayloadItem> {
        self.items.iter().filter(|i| i.is_file_entry)
    }

    /// Whether any item reports an image format. Used by the history panel
    /// to pick a glyph.
    pub fn has_image(&self) -> bool {
        self.items.iter().any(|i| i.format.is_image())
    }

    /// Whether any item reports a textual format.
    pub fn has_text(&self) -> bool {
        self.items.iter().any(|i| i.format.is_text())
    }
}
