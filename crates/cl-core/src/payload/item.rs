use serde::{Deserialize, Serialize};

use crate::payload::FormatTag;
use crate::ports::PayloadFileMeta;

/// One entry extracted from a paste/drop payload.
///
/// Either an inline data entry (one reported format plus its textual
/// content) or a file entry (metadata only, contents are never read).
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadItem {
    pub format: FormatTag,

    /// Textual content, present only for inline data entries.
    pub text_content: Option<String>,

    /// Content length in UTF-8 bytes for inline entries, declared size for
    /// file entries.
    pub byte_size: Option<u64>,

    /// Present only for file entries.
    pub file_name: Option<String>,

    /// Present only for file entries.
    pub last_modified_ms: Option<i64>,

    pub is_text_format: bool,
    pub is_file_entry: bool,
}

impl PayloadItem {
    /// Build an inline data entry from a reported format and its fetched
    /// content. Zero-length content is a legitimate item, not an error.
    pub fn inline(format: FormatTag, text: String) -> Self {
        let is_text_format = format.is_text();
        Self {
            format,
            byte_size: Some(text.len() as u64),
            text_content: Some(text),
            file_name: None,
            last_modified_ms: None,
            is_text_format,
            is_file_entry: false,
        }
    }

    /// Build a file entry from declared metadata. An empty declared type
    /// maps to the literal `"unknown"`.
    pub fn file(meta: &PayloadFileMeta) -> Self {
        let format = if meta.media_type.is_empty() {
            FormatTag::unknown()
        } else {
            FormatTag::from(meta.media_type.as_str())
        };
        let is_text_format = format.is_text();
        Self {
            format,
            text_content: None,
            byte_size: Some(meta.size_bytes),
            file_name: Some(meta.name.clone()),
            last_modified_ms: Some(meta.last_modified_ms),
            is_text_format,
            is_file_entry: true,
        }
    }
}
