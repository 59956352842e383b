//! Tauri command handlers.
//!
//! Commands stay thin: extract managed state, call a use case through the
//! runtime accessor, project the result into a DTO.

pub mod clipboard;
pub mod error;
pub mod history;
pub mod inspect;
pub mod theme;

/// The invoke handler for every ClipLens command.
///
/// Built here (in the defining crate) so the binary only has to plug it
/// into its `tauri::Builder`.
pub fn handler<R: tauri::Runtime>(
) -> impl Fn(tauri::ipc::Invoke<R>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        inspect::inspect_payload,
        history::get_history,
        history::select_snapshot,
        history::clear_history,
        clipboard::copy_field,
        clipboard::get_copied_field,
        theme::set_dark_mode,
        theme::is_dark_mode,
    ]
}
