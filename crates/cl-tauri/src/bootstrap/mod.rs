//! Application bootstrap: tracing init, dependency wiring, runtime.

pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use runtime::AppRuntime;
pub use wiring::AppDeps;
