use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Declared metadata of one file-like entry in a payload. Only metadata is
/// ever inspected; file contents are never read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadFileMeta {
    pub name: String,

    /// Declared MIME type; may be empty.
    pub media_type: String,

    pub size_bytes: u64,

    pub last_modified_ms: i64,
}

/// Abstract view over the raw multi-format data a paste or drop supplies.
///
/// Fetching textual content is potentially asynchronous (the platform may
/// materialize it lazily); format and file listings are cheap synchronous
/// reads. Implementations must allow repeated reads.
#[async_trait::async_trait]
pub trait PayloadSourcePort: Send + Sync {
    /// Format identifiers in the order the payload reports them.
    fn formats(&self) -> Vec<String>;

    /// Textual content of one reported format. An empty string is a valid,
    /// non-error result.
    async fn read_text(&self, format: &str) -> Result<String>;

    /// File-like entries in index order.
    fn files(&self) -> Vec<PayloadFileMeta>;
}
