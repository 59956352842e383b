//! ClipLens launcher.
//!
//! Assembles the runtime and hands control to Tauri. All command and
//! use-case logic lives in the workspace crates; this crate only owns
//! the window, the generated context and process lifetime.

use std::sync::Arc;

use anyhow::Context;
use cl_core::config::AppConfig;
use cl_tauri::bootstrap::tracing::init_tracing_subscriber;
use cl_tauri::{AppRuntime, ThemeState};

pub fn run() -> anyhow::Result<()> {
    // Logging failure must not keep the window from opening.
    if let Err(e) = init_tracing_subscriber() {
        eprintln!("cliplens: tracing init failed: {e:#}");
    }

    let config = AppConfig::default();
    let runtime = Arc::new(AppRuntime::new(config));
    tracing::info!("runtime assembled, starting tauri");

    tauri::Builder::default()
        .manage(runtime)
        .manage(ThemeState::default())
        .invoke_handler(cl_tauri::commands::handler())
        .run(tauri::generate_context!())
        .context("error while running tauri application")?;

    Ok(())
}
