//! Use cases accessor.
//!
//! `AppRuntime` is the central point commands reach for dependencies. It
//! wraps [`AppDeps`](super::wiring::AppDeps) and provides a `usecases()`
//! accessor returning use case instances with their ports pre-wired.
//!
//! Adding a use case: give it a `new()` taking its ports, add a method
//! here, and commands can call `runtime.usecases().your_use_case()`.

use std::sync::Arc;

use cl_app::usecases::{ClearHistory, CopyField, InspectPayload, ListHistory, SelectSnapshot};
use cl_core::config::AppConfig;

use super::wiring::{build_deps, AppDeps};

/// Application runtime with dependencies, managed by Tauri's state system.
pub struct AppRuntime {
    pub config: AppConfig,
    pub deps: AppDeps,
}

impl AppRuntime {
    pub fn new(config: AppConfig) -> Self {
        let deps = build_deps(&config);
        Self { config, deps }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }
}

pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl UseCases<'_> {
    pub fn inspect_payload(&self) -> InspectPayload {
        InspectPayload::new(
            Arc::clone(&self.runtime.deps.state),
            Arc::clone(&self.runtime.deps.clock),
        )
    }

    pub fn list_history(&self) -> ListHistory {
        ListHistory::new(Arc::clone(&self.runtime.deps.state))
    }

    pub fn select_snapshot(&self) -> SelectSnapshot {
        SelectSnapshot::new(Arc::clone(&self.runtime.deps.state))
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(Arc::clone(&self.runtime.deps.state))
    }

    pub fn copy_field(&self) -> CopyField {
        CopyField::new(
            Arc::clone(&self.runtime.deps.clipboard),
            Arc::clone(&self.runtime.deps.indicator),
            self.runtime.config.copied_indicator_ms,
        )
    }
}
