//! Theme commands.
//!
//! The light/dark preference is process-wide presentation context with no
//! bearing on the data model, so it lives in its own managed state and
//! never reaches the domain crates.

use tauri::State;

use crate::state::ThemeState;

#[tauri::command]
pub fn set_dark_mode(theme: State<'_, ThemeState>, enabled: bool) {
    theme.set_dark(enabled);
}

#[tauri::command]
pub fn is_dark_mode(theme: State<'_, ThemeState>) -> bool {
    theme.is_dark()
}
