use std::sync::Arc;

use cl_core::ids::SnapshotId;
use cl_core::payload::Snapshot;

use crate::state::InspectorState;

/// Snapshot of the history panel's data: entries most-recent-first plus the
/// current selection, cloned out so the lock is held only briefly.
#[derive(Debug)]
pub struct HistoryView {
    pub snapshots: Vec<Snapshot>,
    pub current_id: Option<SnapshotId>,
}

/// Use case for reading the history list for display.
pub struct ListHistory {
    state: Arc<InspectorState>,
}

impl ListHistory {
    pub fn new(state: Arc<InspectorState>) -> Self {
        Self { state }
    }

    pub async fn execute(&self) -> HistoryView {
        let history = self.state.history().await;
        HistoryView {
            snapshots: history.entries().to_vec(),
            current_id: history.current_id().cloned(),
        }
    }
}
