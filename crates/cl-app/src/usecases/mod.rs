//! Business logic use cases.
//!
//! Whether something is an independent use case depends on whether the
//! user (or the system) makes a distinct decision there:
//!
//! [paste / drop event]
//!        ↓
//! InspectPayload          → new snapshot, history index 0
//!        ↓
//! ListHistory             → history panel
//! SelectSnapshot          → re-open a past snapshot
//! ClearHistory            → wipe list and selection
//! CopyField               → per-field clipboard write + indicator

pub mod clear_history;
pub mod copy_field;
pub mod inspect_payload;
pub mod list_history;
pub mod select_snapshot;

pub use clear_history::ClearHistory;
pub use copy_field::CopyField;
pub use inspect_payload::{InspectOutcome, InspectPayload};
pub use list_history::{HistoryView, ListHistory};
pub use select_snapshot::SelectSnapshot;
