//! ClipLens application orchestration layer.
//!
//! This crate contains business logic use cases and the shared inspector
//! state they operate on. One struct per user intention; dependencies come
//! in through cl-core ports so everything here runs against fakes in tests.

pub mod indicator;
pub mod state;
pub mod usecases;

pub use indicator::CopiedIndicator;
pub use state::InspectorState;
