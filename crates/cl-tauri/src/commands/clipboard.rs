//! Copy-to-clipboard commands.

use std::sync::Arc;
use tauri::State;

use crate::bootstrap::AppRuntime;
use crate::commands::error::map_err;

/// Write one field's string value to the system clipboard and light the
/// transient "copied" indicator for it. Failures are non-fatal for the
/// page; it may surface or ignore them.
#[tauri::command]
pub async fn copy_field(
    runtime: State<'_, Arc<AppRuntime>>,
    field_key: String,
    value: String,
) -> Result<(), String> {
    runtime
        .usecases()
        .copy_field()
        .execute(&field_key, &value)
        .await
        .map_err(|e| {
            tracing::warn!(field_key, "clipboard copy failed: {e:#}");
            map_err(e)
        })
}

/// Which field is currently showing "copied", if any.
#[tauri::command]
pub async fn get_copied_field(
    runtime: State<'_, Arc<AppRuntime>>,
) -> Result<Option<String>, String> {
    Ok(runtime.deps.indicator.current().await)
}
