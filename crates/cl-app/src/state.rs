use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use cl_core::config::AppConfig;
use cl_core::payload::SnapshotHistory;

/// Shared state of the inspector: the capped history (which also carries
/// the current selection) and the busy flag gating capture.
///
/// All mutation happens behind one async mutex; the busy flag is atomic so
/// a capture attempt can be rejected without waiting on the lock.
pub struct InspectorState {
    history: Mutex<SnapshotHistory>,
    busy: AtomicBool,
}

impl InspectorState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            history: Mutex::new(SnapshotHistory::with_capacity(config.history_capacity)),
            busy: AtomicBool::new(false),
        }
    }

    pub async fn history(&self) -> MutexGuard<'_, SnapshotHistory> {
        self.history.lock().await
    }

    /// Claim the busy flag. Returns false when a capture is already
    /// outstanding; the caller must not proceed in that case.
    pub fn try_begin_capture(&self) -> bool {
        !self.busy.swap(true, Ordering::SeqCst)
    }

    pub fn end_capture(&self) {
        self.busy.store(false, Ordering::SeqCst);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_flag_claims_once() {
        let state = InspectorState::new(&AppConfig::default());
        assert!(!state.is_busy());
        assert!(state.try_begin_capture());
        assert!(state.is_busy());
        assert!(!state.try_begin_capture());
        state.end_capture();
        assert!(state.try_begin_capture());
    }

    #[tokio::test]
    async fn test_history_capacity_comes_from_config() {
        let config = AppConfig {
            history_capacity: 3,
            ..AppConfig::default()
        };
        let state = InspectorState::new(&config);
        assert_eq!(state.history().await.capacity(), 3);
    }
}
