use anyhow::{Context, Result};
use std::sync::Arc;

use cl_core::payload::{PayloadNormalizer, Snapshot};
use cl_core::ports::{ClockPort, PayloadSourcePort};

use crate::state::InspectorState;

/// Result of a capture attempt.
#[derive(Debug)]
pub enum InspectOutcome {
    /// A snapshot was produced, recorded at history index 0, and selected.
    Captured(Snapshot),

    /// A normalization was already outstanding; the payload was not
    /// actioned. Nothing is queued.
    Busy,
}

/// Use case for turning a paste/drop payload into the current snapshot.
///
/// Responsibilities:
/// - Gate capture on the busy flag (no queueing, no cancellation)
/// - Normalize the payload through its capability port
/// - Record the snapshot into history (prepend + cap + select)
///
/// On failure no snapshot is produced: history and the prior selection
/// stay untouched and the busy flag clears.
pub struct InspectPayload {
    state: Arc<InspectorState>,
    normalizer: PayloadNormalizer,
}

impl InspectPayload {
    pub fn new(state: Arc<InspectorState>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            state,
            normalizer: PayloadNormalizer::new(clock),
        }
    }

    pub async fn execute(&self, payload: &dyn PayloadSourcePort) -> Result<InspectOutcome> {
        if !self.state.try_begin_capture() {
            tracing::warn!("capture attempt while busy, payload not actioned");
            return Ok(InspectOutcome::Busy);
        }

        let result = self
            .normalizer
            .normalize(payload)
            .await
            .context("payload normalization failed");

        match result {
            Ok(snapshot) => {
                self.state.history().await.record(snapshot.clone());
                self.state.end_capture();
                tracing::info!(snapshot_id = %snapshot.id, "recorded snapshot");
                Ok(InspectOutcome::Captured(snapshot))
            }
            Err(e) => {
                self.state.end_capture();
                Err(e)
            }
        }
    }
}
