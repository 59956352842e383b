//! # cl-core
//!
//! Core domain models and business logic for ClipLens.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod payload;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::SnapshotId;
pub use payload::{FormatTag, PayloadItem, Snapshot, SnapshotHistory};
