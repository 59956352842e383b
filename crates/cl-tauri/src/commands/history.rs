//! History panel commands.

use std::sync::Arc;
use tauri::State;

use cl_core::ids::SnapshotId;

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;
use crate::models::{HistoryViewDto, SnapshotDto};

/// Current history entries, most-recent-first, plus the selected id.
#[tauri::command]
pub async fn get_history(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<HistoryViewDto, String> {
    let view = runtime.usecases().list_history().execute().await;
    Ok(HistoryViewDto::from(&view))
}

/// Re-open a snapshot still present in history. History order and
/// membership are never altered by selection.
#[tauri::command]
pub async fn select_snapshot(
    runtime: State<'_, Arc<AppRuntime>>,
    id: String,
) -> Result<SnapshotDto, String> {
    let uc = runtime.usecases().select_snapshot();
    let snapshot = uc
        .execute(&SnapshotId::from(id))
        .await
        .map_err(map_err)?;
    Ok(SnapshotDto::from(&snapshot))
}

/// Empty the history and drop the current selection.
#[tauri::command]
pub async fn clear_history(runtime: State<'_, Arc<AppRuntime>>) -> Result<(), String> {
    runtime.usecases().clear_history().execute().await;
    Ok(())
}
