use std::sync::Arc;

use crate::state::InspectorState;

/// Use case for wiping the history list and the current selection.
pub struct ClearHistory {
    state: Arc<InspectorState>,
}

impl ClearHistory {
    pub fn new(state: Arc<InspectorState>) -> Self {
        Self { state }
    }

    pub async fn execute(&self) {
        let mut history = self.state.history().await;
        let dropped = history.len();
        history.clear();
        tracing::info!(dropped, "cleared history");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cl_core::config::AppConfig;
    use cl_core::ids::SnapshotId;
    use cl_core::payload::Snapshot;

    #[tokio::test]
    async fn test_clear_resets_list_and_selection() {
        let state = Arc::new(InspectorState::new(&AppConfig::default()));
        {
            let mut history = state.history().await;
            history.record(Snapshot {
                id: SnapshotId::new(),
                captured_at_ms: 1,
                distinct_format_count: 0,
                entry_count: 0,
                file_count: 0,
                items: vec![],
            });
        }

        ClearHistory::new(Arc::clone(&state)).execute().await;

        let history = state.history().await;
        assert!(history.is_empty());
        assert_eq!(history.current_id(), None);
    }
}
