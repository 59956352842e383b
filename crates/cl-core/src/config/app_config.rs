use serde::{Deserialize, Serialize};

use crate::payload::HISTORY_CAPACITY;

/// Tunables assembled at bootstrap. Nothing here is persisted; the app
/// deliberately keeps no configuration across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maximum number of snapshots the history retains.
    pub history_capacity: usize,

    /// How long the per-field "copied" indicator stays lit.
    pub copied_indicator_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            copied_indicator_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.copied_indicator_ms, 2_000);
    }
}
