//! Dependency injection.
//!
//! Creates the platform implementations and hands them to the app layer as
//! `Arc<dyn Port>`. This is the only module allowed to depend on
//! cl-platform and cl-app simultaneously, and the privilege is for
//! assembly only; no business decisions here.

use std::sync::Arc;

use cl_app::{CopiedIndicator, InspectorState};
use cl_core::config::AppConfig;
use cl_core::ports::{ClockPort, SystemClipboardPort};
use cl_platform::{SystemClipboard, SystemClock};

/// Everything the commands need, pre-wired.
///
/// Assembly cannot fail: the clipboard adapter opens its platform handle
/// per write, not here.
pub struct AppDeps {
    pub state: Arc<InspectorState>,
    pub clock: Arc<dyn ClockPort>,
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub indicator: Arc<CopiedIndicator>,
}

pub fn build_deps(config: &AppConfig) -> AppDeps {
    AppDeps {
        state: Arc::new(InspectorState::new(config)),
        clock: Arc::new(SystemClock),
        clipboard: Arc::new(SystemClipboard::new()),
        indicator: Arc::new(CopiedIndicator::new()),
    }
}
