//! # Timeline
//!
//! Dated events. Each entry renders as `<strong>{date}:</strong> {text}` and
//! the whole list can be exported as `timeline.json`: a pretty-printed JSON
//! array with the visible text of every entry.
//!
//! ## Example
//!
//! ```rust
//! use casefile_core::store::MemoryStore;
//! use casefile_core::timeline::Timeline;
//!
//! let mut store = MemoryStore::new();
//! let mut timeline = Timeline::default();
//! timeline.append(&mut store, Some("Report filed")).unwrap();
//!
//! let export = timeline.export().unwrap();
//! assert_eq!(export.file_name, "timeline.json");
//! ```

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::dates::DateStyle;
use crate::errors::CaseResult;
use crate::list_editor::{ListEditor, ListKind};
use crate::store::TIMELINE_KEY;

/// File name offered for the export download
pub const EXPORT_FILE_NAME: &str = "timeline.json";

/// Markup and storage details of the timeline list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineKind;

impl ListKind for TimelineKind {
    const STORAGE_KEY: &'static str = TIMELINE_KEY;
    const NAME: &'static str = "timeline";
    const PROMPT: &'static str = "Enter a new timeline event:";

    fn wrap(escaped: &str, now: &DateTime<Local>, dates: &DateStyle) -> String {
        format!("<strong>{}:</strong> {}", dates.format_date(now), escaped)
    }
}

pub type Timeline = ListEditor<TimelineKind>;

/// A file ready to hand to the user (browser download or save dialog)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ListEditor<TimelineKind> {
    /// Serialize the visible text of every entry as a pretty JSON array.
    ///
    /// Reads only the in-memory list; neither the store nor the list change.
    pub fn export_json(&self) -> CaseResult<String> {
        Ok(serde_json::to_string_pretty(&self.display())?)
    }

    /// The export wrapped as a `timeline.json` download
    pub fn export(&self) -> CaseResult<Download> {
        Ok(Download {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: "application/json".to_string(),
            contents: self.export_json()?,
        })
    }
}
