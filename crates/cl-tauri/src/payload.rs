//! The payload as serialized by the webview.
//!
//! `DataTransfer` cannot cross the IPC boundary, so the page reads every
//! reported format (and the file list metadata) up front and ships the
//! result here. `RawPayload` then implements the payload-source port, which
//! keeps the normalizer oblivious to where the data came from and makes
//! repeated reads trivially safe.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;

use cl_core::ports::{PayloadFileMeta, PayloadSourcePort};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFormatEntry {
    pub format: String,

    /// Content of this representation; empty string is a valid value.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFileEntry {
    pub name: String,

    /// Declared MIME type; browsers report an empty string when unknown.
    #[serde(default)]
    pub media_type: String,

    pub size: u64,

    #[serde(default)]
    pub last_modified_ms: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayload {
    #[serde(default)]
    pub formats: Vec<RawFormatEntry>,

    #[serde(default)]
    pub files: Vec<RawFileEntry>,
}

#[async_trait]
impl PayloadSourcePort for RawPayload {
    fn formats(&self) -> Vec<String> {
        self.formats.iter().map(|entry| entry.format.clone()).collect()
    }

    async fn read_text(&self, format: &str) -> Result<String> {
        self.formats
            .iter()
            .find(|entry| entry.format == format)
            .map(|entry| entry.text.clone())
            .ok_or_else(|| anyhow!("format not present in payload: {format}"))
    }

    fn files(&self) -> Vec<PayloadFileMeta> {
        self.files
            .iter()
            .map(|file| PayloadFileMeta {
                name: file.name.clone(),
                media_type: file.media_type.clone(),
                size_bytes: file.size,
                last_modified_ms: file.last_modified_ms,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_webview_shape() {
        let payload: RawPayload = serde_json::from_str(
            r#"{
                "formats": [
                    {"format": "text/plain", "text": "hello"},
                    {"format": "text/html"}
                ],
                "files": [
                    {"name": "a.png", "mediaType": "image/png", "size": 10, "lastModifiedMs": 5}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.formats.len(), 2);
        assert_eq!(payload.formats[1].text, "");
        assert_eq!(payload.files[0].media_type, "image/png");
    }

    #[tokio::test]
    async fn test_port_view_round_trips() {
        let payload: RawPayload = serde_json::from_str(
            r#"{"formats": [{"format": "text/plain", "text": "x"}], "files": []}"#,
        )
        .unwrap();

        assert_eq!(payload.formats(), vec!["text/plain".to_string()]);
        assert_eq!(payload.read_text("text/plain").await.unwrap(), "x");
        assert!(payload.read_text("text/html").await.is_err());
        assert!(payload.files().is_empty());
    }

    // A pure file drop reports the "Files" pseudo-format alongside the
    // file list; it counts as a type and shows up as an inline entry.
    #[tokio::test]
    async fn test_file_drop_keeps_files_pseudo_format() {
        use cl_core::payload::PayloadNormalizer;
        use cl_core::ports::ClockPort;
        use std::sync::Arc;

        struct FixedClock;
        impl ClockPort for FixedClock {
            fn now_ms(&self) -> i64 {
                0
            }
        }

        let payload: RawPayload = serde_json::from_str(
            r#"{
                "formats": [{"format": "Files", "text": ""}],
                "files": [
                    {"name": "a.png", "mediaType": "image/png", "size": 10, "lastModifiedMs": 5}
                ]
            }"#,
        )
        .unwrap();

        let snapshot = PayloadNormalizer::new(Arc::new(FixedClock))
            .normalize(&payload)
            .await
            .unwrap();

        assert_eq!(snapshot.distinct_format_count, 1);
        assert_eq!(snapshot.file_count, 1);
        assert_eq!(snapshot.items[0].format.as_str(), "Files");
        assert_eq!(snapshot.items[0].text_content.as_deref(), Some(""));
        assert!(!snapshot.items[0].is_file_entry);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let payload: RawPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.formats.is_empty());
        assert!(payload.files.is_empty());
    }
}
