//! Serializable projections of the domain types for the webview.
//!
//! Domain values stay in snake_case millisecond-epoch form; everything the
//! page renders verbatim (formatted sizes, timestamp labels, preview lines)
//! is computed here so the page stays a dumb template.

use chrono::{Local, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

use cl_app::usecases::HistoryView;
use cl_core::payload::{format_size, PayloadItem, Snapshot};

/// Kind bucket the history panel uses to pick a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    Image,
    Text,
    Other,
}

impl From<&Snapshot> for SnapshotKind {
    fn from(snapshot: &Snapshot) -> Self {
        if snapshot.has_image() {
            SnapshotKind::Image
        } else if snapshot.has_text() {
            SnapshotKind::Text
        } else {
            SnapshotKind::Other
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadItemDto {
    pub format: String,
    pub text_content: Option<String>,
    pub byte_size: Option<u64>,
    /// e.g. "512 bytes", "2.00 KB"; "Unknown size" when no size is known.
    pub formatted_size: String,
    pub file_name: Option<String>,
    pub last_modified_ms: Option<i64>,
    /// ISO-8601 form of `last_modified_ms`, the value the copy button writes.
    pub last_modified_iso: Option<String>,
    /// Local-time rendering of `last_modified_ms` for display.
    pub last_modified_label: Option<String>,
    pub is_text_format: bool,
    pub is_file_entry: bool,
}

impl From<&PayloadItem> for PayloadItemDto {
    fn from(item: &PayloadItem) -> Self {
        Self {
            format: item.format.to_string(),
            text_content: item.text_content.clone(),
            byte_size: item.byte_size,
            formatted_size: item
                .byte_size
                .map(format_size)
                .unwrap_or_else(|| "Unknown size".to_string()),
            file_name: item.file_name.clone(),
            last_modified_ms: item.last_modified_ms,
            last_modified_iso: item.last_modified_ms.and_then(iso_timestamp),
            last_modified_label: item.last_modified_ms.and_then(local_datetime_label),
            is_text_format: item.is_text_format,
            is_file_entry: item.is_file_entry,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDto {
    pub id: String,
    pub captured_at_ms: i64,
    /// e.g. "Mar 4, 2026, 1:02:03 PM".
    pub captured_at_label: String,
    pub types_count: usize,
    pub items_count: usize,
    pub files_count: usize,
    pub items: Vec<PayloadItemDto>,
}

impl From<&Snapshot> for SnapshotDto {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            id: snapshot.id.to_string(),
            captured_at_ms: snapshot.captured_at_ms,
            captured_at_label: local_datetime_label(snapshot.captured_at_ms)
                .unwrap_or_default(),
            types_count: snapshot.distinct_format_count,
            items_count: snapshot.entry_count,
            files_count: snapshot.file_count,
            items: snapshot.items.iter().map(PayloadItemDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryDto {
    pub id: String,
    pub captured_at_ms: i64,
    /// Time-of-day label, e.g. "1:02:03 PM".
    pub time_label: String,
    /// First item's file name, else its format's major type, else
    /// "Clipboard item".
    pub preview: String,
    /// e.g. "2 types · 2 items · 1 file".
    pub counts_line: String,
    pub kind: SnapshotKind,
}

impl From<&Snapshot> for HistoryEntryDto {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            id: snapshot.id.to_string(),
            captured_at_ms: snapshot.captured_at_ms,
            time_label: local_time_label(snapshot.captured_at_ms).unwrap_or_default(),
            preview: preview_label(snapshot),
            counts_line: counts_line(snapshot),
            kind: SnapshotKind::from(snapshot),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryViewDto {
    pub entries: Vec<HistoryEntryDto>,
    pub current_id: Option<String>,
}

impl From<&HistoryView> for HistoryViewDto {
    fn from(view: &HistoryView) -> Self {
        Self {
            entries: view.snapshots.iter().map(HistoryEntryDto::from).collect(),
            current_id: view.current_id.as_ref().map(|id| id.to_string()),
        }
    }
}

fn preview_label(snapshot: &Snapshot) -> String {
    match snapshot.items.first() {
        Some(item) => item
            .file_name
            .clone()
            .unwrap_or_else(|| item.format.major_type().to_string()),
        None => "Clipboard item".to_string(),
    }
}

fn counts_line(snapshot: &Snapshot) -> String {
    let mut line = format!(
        "{} {} · {} {}",
        snapshot.distinct_format_count,
        pluralize(snapshot.distinct_format_count, "type", "types"),
        snapshot.entry_count,
        pluralize(snapshot.entry_count, "item", "items"),
    );
    if snapshot.file_count > 0 {
        line.push_str(&format!(
            " · {} {}",
            snapshot.file_count,
            pluralize(snapshot.file_count, "file", "files")
        ));
    }
    line
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

fn iso_timestamp(ms: i64) -> Option<String> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn local_datetime_label(ms: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%b %-d, %Y, %-I:%M:%S %p").to_string())
}

fn local_time_label(ms: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%-I:%M:%S %p").to_string())
}
