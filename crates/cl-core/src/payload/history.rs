use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::SnapshotId;
use crate::payload::Snapshot;

/// Default history bound. Inserting an eleventh snapshot evicts the oldest.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("snapshot not found: {id}")]
    SnapshotNotFound { id: String },
}

/// Capped most-recent-first list of snapshots plus the current selection.
///
/// Mutated only by [`record`](Self::record) (prepend, truncate, select),
/// [`select`](Self::select) (selection only, membership and order
/// untouched) and [`clear`](Self::clear) (empties list and selection).
/// Entries are immutable and never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotHistory {
    entries: Vec<Snapshot>,
    current: Option<SnapshotId>,
    capacity: usize,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            capacity,
        }
    }

    /// Prepend `snapshot`, evict the oldest entries past capacity, and make
    /// the new snapshot the current selection.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.current = Some(snapshot.id.clone());
        self.entries.insert(0, snapshot);
        if self.entries.len() > self.capacity {
            tracing::debug!(
                evicted = self.entries.len() - self.capacity,
                "history at capacity, evicting oldest"
            );
            self.entries.truncate(self.capacity);
        }
    }

    /// Point the current selection at an entry already in the list.
    /// List order and membership are untouched either way.
    pub fn select(&mut self, id: &SnapshotId) -> Result<&Snapshot, HistoryError> {
        let index = self
            .entries
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| HistoryError::SnapshotNotFound { id: id.to_string() })?;
        self.current = Some(id.clone());
        Ok(&self.entries[index])
    }

    /// Empty the list and drop the selection (explicitly none, not
    /// "no selection yet").
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = None;
    }

    /// Most-recent-first.
    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn current_id(&self) -> Option<&SnapshotId> {
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&Snapshot> {
        let id = self.current.as_ref()?;
        self.entries.iter().find(|s| &s.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::fixtures::snapshot_at;

    #[test]
    fn test_record_prepends_and_selects() {
        let mut history = SnapshotHistory::new();
        let first = snapshot_at(1);
        let second = snapshot_at(2);
        let second_id = second.id.clone();

        history.record(first);
        history.record(second);

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].captured_at_ms, 2);
        assert_eq!(history.entries()[1].captured_at_ms, 1);
        assert_eq!(history.current_id(), Some(&second_id));
        assert_eq!(history.current().unwrap().captured_at_ms, 2);
    }

    #[test]
    fn test_eleventh_record_evicts_oldest() {
        let mut history = SnapshotHistory::new();
        for i in 1..=11 {
            history.record(snapshot_at(i));
        }

        assert_eq!(history.len(), 10);
        // Most-recent first: #11 down to #2; #1 evicted.
        assert_eq!(history.entries()[0].captured_at_ms, 11);
        assert_eq!(history.entries()[9].captured_at_ms, 2);
        assert!(!history.entries().iter().any(|s| s.captured_at_ms == 1));
    }

    #[test]
    fn test_select_does_not_reorder() {
        let mut history = SnapshotHistory::new();
        for i in 1..=3 {
            history.record(snapshot_at(i));
        }
        let oldest_id = history.entries()[2].id.clone();

        let selected = history.select(&oldest_id).unwrap();
        assert_eq!(selected.captured_at_ms, 1);

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0].captured_at_ms, 3);
        assert_eq!(history.entries()[2].captured_at_ms, 1);
        assert_eq!(history.current_id(), Some(&oldest_id));
    }

    #[test]
    fn test_select_unknown_id_reports_lookup_failure() {
        let mut history = SnapshotHistory::new();
        history.record(snapshot_at(1));
        let before = history.current_id().cloned();

        let missing = crate::ids::SnapshotId::from("nope");
        let err = history.select(&missing).unwrap_err();
        assert_eq!(
            err,
            HistoryError::SnapshotNotFound {
                id: "nope".to_string()
            }
        );
        // Failed lookup leaves the selection alone.
        assert_eq!(history.current_id().cloned(), before);
    }

    #[test]
    fn test_clear_empties_list_and_selection() {
        let mut history = SnapshotHistory::new();
        for i in 1..=5 {
            history.record(snapshot_at(i));
        }

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.current_id(), None);
        assert!(history.current().is_none());
    }

    #[test]
    fn test_custom_capacity() {
        let mut history = SnapshotHistory::with_capacity(2);
        for i in 1..=3 {
            history.record(snapshot_at(i));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].captured_at_ms, 2);
    }
}
