//! # cl-tauri
//!
//! Tauri integration layer for ClipLens.
//!
//! This crate provides:
//! - Tauri command handlers
//! - DTO projections for the webview
//! - The webview payload adapter for the payload-source port
//! - Bootstrap (tracing init, dependency wiring, runtime)
//!
//! ## Modules
//!
//! - **commands**: Tauri command handlers (inspect, history, clipboard, theme)
//! - **models**: serializable projections of the domain types
//! - **payload**: `RawPayload` as sent by the webview paste/drop handlers
//! - **state**: Tauri-managed state (theme)
//! - **bootstrap**: tracing init, wiring, and the `AppRuntime`

pub mod bootstrap;
pub mod commands;
pub mod models;
pub mod payload;
pub mod state;

// Re-export commonly used types
pub use bootstrap::runtime::AppRuntime;
pub use state::ThemeState;
