//! Payload capture command.

use std::sync::Arc;
use tauri::State;

use cl_app::usecases::InspectOutcome;

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;
use crate::models::SnapshotDto;
use crate::payload::RawPayload;

/// Normalize a pasted/dropped payload into a snapshot and record it.
///
/// Returns `None` when a capture was already in flight (the payload is not
/// actioned, nothing is queued). Errors mean no new snapshot was produced;
/// the previous selection and history are unchanged.
#[tauri::command]
pub async fn inspect_payload(
    runtime: State<'_, Arc<AppRuntime>>,
    payload: RawPayload,
) -> Result<Option<SnapshotDto>, String> {
    tracing::info!(
        formats = payload.formats.len(),
        files = payload.files.len(),
        "inspecting payload"
    );

    let uc = runtime.usecases().inspect_payload();
    match uc.execute(&payload).await {
        Ok(InspectOutcome::Captured(snapshot)) => Ok(Some(SnapshotDto::from(&snapshot))),
        Ok(InspectOutcome::Busy) => Ok(None),
        Err(e) => {
            tracing::error!("payload inspection failed: {e:#}");
            Err(map_err(e))
        }
    }
}
