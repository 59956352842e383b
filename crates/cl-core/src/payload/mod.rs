//! Payload domain models.
//!
//! Everything a paste or drop produces lives here: the per-item
//! description, the immutable snapshot, the capped history, and the
//! normalizer that turns a raw payload into a snapshot.

mod format;
mod history;
mod item;
mod normalizer;
mod size;
mod snapshot;

pub use format::FormatTag;
pub use history::{HistoryError, SnapshotHistory, HISTORY_CAPACITY};
pub use item::PayloadItem;
pub use normalizer::PayloadNormalizer;
pub use size::format_size;
pub use snapshot::Snapshot;

#[cfg(test)]
pub(crate) mod fixtures;
