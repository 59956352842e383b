use anyhow::Result;
use std::sync::Arc;

use crate::ids::SnapshotId;
use crate::payload::{FormatTag, PayloadItem, Snapshot};
use crate::ports::{ClockPort, PayloadSourcePort};

/// Converts a raw multi-format paste/drop payload into a [`Snapshot`].
///
/// The payload is read through the [`PayloadSourcePort`] capability so the
/// normalizer can be exercised against a synthetic in-memory source; it
/// never touches a real input device. Reads are side-effect free with
/// respect to the payload.
pub struct PayloadNormalizer {
    clock: Arc<dyn ClockPort>,
}

impl PayloadNormalizer {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    /// Produce a snapshot from `payload`.
    ///
    /// Inline items come first, in the order the payload reports its
    /// formats, then file items in index order. A payload with zero formats
    /// and zero files still yields a snapshot (with empty `items`). There is
    /// no partial success: if any content fetch fails, no snapshot is
    /// produced.
    pub async fn normalize(&self, payload: &dyn PayloadSourcePort) -> Result<Snapshot> {
        let formats = payload.formats();
        let files = payload.files();

        let mut items = Vec::with_capacity(formats.len() + files.len());

        for format in &formats {
            let text = payload.read_text(format).await?;
            items.push(PayloadItem::inline(FormatTag::from(format.as_str()), text));
        }

        for file in &files {
            items.push(PayloadItem::file(file));
        }

        let snapshot = Snapshot {
            id: SnapshotId::new(),
            captured_at_ms: self.clock.now_ms(),
            distinct_format_count: formats.len(),
            // Deliberately the format count as well; see the field docs.
            entry_count: formats.len(),
            file_count: files.len(),
            items,
        };

        tracing::debug!(
            snapshot_id = %snapshot.id,
            formats = snapshot.distinct_format_count,
            files = snapshot.file_count,
            "normalized payload"
        );

        Ok(snapshot)
    }
}
