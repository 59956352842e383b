use anyhow::Result;
use std::sync::Arc;

use cl_core::ids::SnapshotId;
use cl_core::payload::Snapshot;

use crate::state::InspectorState;

/// Use case for re-opening a snapshot that is still in history.
///
/// Selection never alters history order or membership.
pub struct SelectSnapshot {
    state: Arc<InspectorState>,
}

impl SelectSnapshot {
    pub fn new(state: Arc<InspectorState>) -> Self {
        Self { state }
    }

    pub async fn execute(&self, id: &SnapshotId) -> Result<Snapshot> {
        let mut history = self.state.history().await;
        let snapshot = history.select(id)?.clone();
        tracing::debug!(snapshot_id = %id, "selected snapshot from history");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cl_core::config::AppConfig;
    use cl_core::payload::{HistoryError, PayloadItem, Snapshot};

    fn snapshot(tag: i64) -> Snapshot {
        Snapshot {
            id: SnapshotId::new(),
            captured_at_ms: tag,
            distinct_format_count: 1,
            entry_count: 1,
            file_count: 0,
            items: vec![PayloadItem::inline("text/plain".into(), tag.to_string())],
        }
    }

    #[tokio::test]
    async fn test_select_returns_snapshot_and_updates_selection() {
        let state = Arc::new(InspectorState::new(&AppConfig::default()));
        let old = snapshot(1);
        let old_id = old.id.clone();
        {
            let mut history = state.history().await;
            history.record(old);
            history.record(snapshot(2));
        }

        let selected = SelectSnapshot::new(Arc::clone(&state))
            .execute(&old_id)
            .await
            .unwrap();
        assert_eq!(selected.captured_at_ms, 1);

        let history = state.history().await;
        assert_eq!(history.current_id(), Some(&old_id));
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].captured_at_ms, 2);
    }

    #[tokio::test]
    async fn test_select_unknown_id_fails() {
        let state = Arc::new(InspectorState::new(&AppConfig::default()));
        let err = SelectSnapshot::new(state)
            .execute(&SnapshotId::from("missing"))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<HistoryError>().is_some());
    }
}
