//! Human-readable date stamps for timeline entries and tips.
//!
//! Defaults follow the US locale rendering of a short date (`10/16/2026`)
//! and a date-time (`10/16/2026, 3:04:05 PM`).

use std::fmt::Write;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Short local date, e.g. `10/16/2026`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Local date and time, e.g. `10/16/2026, 3:04:05 PM`
pub const DEFAULT_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// `chrono` format strings used when stamping new entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateStyle {
    /// Prefix for timeline entries
    pub date: String,
    /// `date` field of tip records
    pub datetime: String,
}

impl Default for DateStyle {
    fn default() -> Self {
        DateStyle {
            date: DEFAULT_DATE_FORMAT.to_string(),
            datetime: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl DateStyle {
    pub fn format_date(&self, at: &DateTime<Local>) -> String {
        format_or_default(at, &self.date, DEFAULT_DATE_FORMAT)
    }

    pub fn format_datetime(&self, at: &DateTime<Local>) -> String {
        format_or_default(at, &self.datetime, DEFAULT_DATETIME_FORMAT)
    }
}

/// `chrono` reports a bad specifier as a `fmt::Error`, which `to_string` would panic on
fn format_or_default(at: &DateTime<Local>, format: &str, default: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_err() {
        log::warn!("Invalid date format '{}', using '{}'", format, default);
        out.clear();
        let _ = write!(out, "{}", at.format(default));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_formats() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 15, 4, 5).unwrap();
        let style = DateStyle::default();
        assert_eq!(style.format_date(&at), "3/7/2026");
        assert_eq!(style.format_datetime(&at), "3/7/2026, 3:04:05 PM");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 15, 4, 5).unwrap();
        let style = DateStyle {
            date: "%Q".to_string(),
            ..DateStyle::default()
        };
        assert_eq!(style.format_date(&at), "3/7/2026");
    }

    #[test]
    fn test_partial_style_deserializes_with_defaults() {
        let style: DateStyle = serde_json::from_str(r#"{"date":"%Y-%m-%d"}"#).unwrap();
        assert_eq!(style.date, "%Y-%m-%d");
        assert_eq!(style.datetime, DEFAULT_DATETIME_FORMAT);
    }
}
