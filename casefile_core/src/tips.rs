//! # Tip Form
//!
//! A three-field feedback form. Submitting appends a [`TipRecord`] to the
//! array stored under `tipsData`; the message is the only required field.
//!
//! Loading the stored array is forgiving: a missing value, or one that is not
//! a JSON array, counts as "no tips yet" without a warning, unlike the list
//! editors' restore path which logs bad data. Elements of a readable array
//! are kept as stored when a new tip is appended, whatever their shape.
//!
//! ## Example
//!
//! ```rust
//! use casefile_core::store::MemoryStore;
//! use casefile_core::tips::{load_tips, SubmitOutcome, TipForm};
//!
//! let mut store = MemoryStore::new();
//! let mut form = TipForm::default();
//! form.message = "  Check the ledger  ".to_string();
//!
//! let outcome = form.submit(&mut store).unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Saved(_)));
//! assert_eq!(load_tips(&store).unwrap()[0].message, "Check the ledger");
//! assert!(form.is_blank());
//! ```

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dates::DateStyle;
use crate::errors::CaseResult;
use crate::store::{KeyValueStore, TIPS_KEY};

/// Notice shown when the message field is empty
pub const MESSAGE_REQUIRED: &str = "Message is required.";

/// Notice shown after a tip is stored
pub const TIP_SAVED: &str = "Tip saved locally (demo only).";

/// One submitted tip as stored in `tipsData`. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipRecord {
    pub name: String,
    pub contact: String,
    pub message: String,
    /// Local date and time of submission, human-readable
    pub date: String,
}

/// Result of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was stored and the fields were kept
    Rejected,
    /// The record was appended and the form cleared
    Saved(TipRecord),
}

impl SubmitOutcome {
    /// The message to show the user for this outcome
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Rejected => MESSAGE_REQUIRED,
            SubmitOutcome::Saved(_) => TIP_SAVED,
        }
    }
}

/// Current contents of the form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipForm {
    pub name: String,
    pub contact: String,
    pub message: String,
    dates: DateStyle,
}

impl TipForm {
    pub fn new(dates: DateStyle) -> Self {
        TipForm {
            dates,
            ..Self::default()
        }
    }

    /// Validate and store the form, stamped with the current local time
    pub fn submit<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> CaseResult<SubmitOutcome> {
        self.submit_at(store, &Local::now())
    }

    /// Validate and store the form.
    ///
    /// Fields are trimmed first. An empty message rejects the submit and
    /// leaves both the store and the fields untouched. Otherwise the record
    /// is appended to the stored array, the array is written back in full
    /// and the fields are cleared.
    pub fn submit_at<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        now: &DateTime<Local>,
    ) -> CaseResult<SubmitOutcome> {
        let message = self.message.trim();
        if message.is_empty() {
            return Ok(SubmitOutcome::Rejected);
        }

        let record = TipRecord {
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            message: message.to_string(),
            date: self.dates.format_datetime(now),
        };

        let mut tips = stored_array(store)?;
        tips.push(serde_json::to_value(&record)?);
        store.set(TIPS_KEY, &serde_json::to_string(&tips)?)?;
        log::debug!("Stored tip #{}", tips.len());

        self.clear();
        Ok(SubmitOutcome::Saved(record))
    }

    /// Reset all fields without validating or storing anything
    pub fn clear(&mut self) {
        self.name.clear();
        self.contact.clear();
        self.message.clear();
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.contact.is_empty() && self.message.is_empty()
    }
}

/// Stored tips in submission order.
///
/// A missing value, or one that is not a JSON array, yields an empty list.
/// Elements that are not objects are skipped. Only a failing store is an error.
pub fn load_tips<S: KeyValueStore + ?Sized>(store: &S) -> CaseResult<Vec<TipRecord>> {
    Ok(stored_array(store)?
        .into_iter()
        .filter_map(|tip| serde_json::from_value(tip).ok())
        .collect())
}

/// Raw elements of `tipsData`, untouched
fn stored_array<S: KeyValueStore + ?Sized>(store: &S) -> CaseResult<Vec<Value>> {
    let parsed = store
        .get(TIPS_KEY)?
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok());
    Ok(match parsed {
        Some(Value::Array(tips)) => tips,
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 14, 5, 9).unwrap()
    }

    fn filled(name: &str, contact: &str, message: &str) -> TipForm {
        TipForm {
            name: name.to_string(),
            contact: contact.to_string(),
            message: message.to_string(),
            ..TipForm::default()
        }
    }

    #[test]
    fn test_empty_message_rejected_without_side_effects() {
        let mut store = MemoryStore::with_entries([(TIPS_KEY, "[]")]);
        let mut form = filled("Ann", "ann@example.com", "   ");

        let outcome = form.submit_at(&mut store, &at()).unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(outcome.notice(), "Message is required.");
        assert_eq!(store.get(TIPS_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(form, filled("Ann", "ann@example.com", "   "));
    }

    #[test]
    fn test_message_only_submit() {
        let mut store = MemoryStore::new();
        let mut form = filled("", "", "Hello");

        let outcome = form.submit_at(&mut store, &at()).unwrap();
        assert_eq!(outcome.notice(), TIP_SAVED);

        let tips = load_tips(&store).unwrap();
        let last = tips.last().unwrap();
        assert_eq!(last.message, "Hello");
        assert_eq!(last.name, "");
        assert_eq!(last.date, "10/16/2026, 2:05:09 PM");
        assert!(form.is_blank());
    }

    #[test]
    fn test_submit_trims_and_appends() {
        let mut store = MemoryStore::new();
        filled(" A ", " a@x ", " first ").submit_at(&mut store, &at()).unwrap();
        filled("", "", "second").submit_at(&mut store, &at()).unwrap();

        let tips = load_tips(&store).unwrap();
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].name, "A");
        assert_eq!(tips[0].contact, "a@x");
        assert_eq!(tips[0].message, "first");
        assert_eq!(tips[1].message, "second");
    }

    #[test]
    fn test_stored_shape() {
        let mut store = MemoryStore::new();
        filled("N", "C", "M").submit_at(&mut store, &at()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&store.get(TIPS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{
                "name": "N",
                "contact": "C",
                "message": "M",
                "date": "10/16/2026, 2:05:09 PM"
            }])
        );
    }

    #[test]
    fn test_corrupt_tips_treated_as_empty() {
        let mut store = MemoryStore::with_entries([(TIPS_KEY, "{not json")]);
        assert!(load_tips(&store).unwrap().is_empty());

        filled("", "", "fresh start").submit_at(&mut store, &at()).unwrap();
        let tips = load_tips(&store).unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].message, "fresh start");
    }

    #[test]
    fn test_earlier_tips_with_missing_fields_survive_submit() {
        let earlier = r#"[{"name":"old","message":"earlier tip","date":"1/1/2026"},"stray",{"message":"x","source":"import"}]"#;
        let mut store = MemoryStore::with_entries([(TIPS_KEY, earlier)]);

        filled("", "", "new").submit_at(&mut store, &at()).unwrap();

        let raw: Vec<Value> = serde_json::from_str(&store.get(TIPS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(raw.len(), 4);
        assert_eq!(raw[0], serde_json::json!({"name":"old","message":"earlier tip","date":"1/1/2026"}));
        assert_eq!(raw[1], serde_json::json!("stray"));
        assert_eq!(raw[2]["source"], "import");
        assert_eq!(raw[3]["message"], "new");

        let tips = load_tips(&store).unwrap();
        let messages: Vec<&str> = tips.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["earlier tip", "x", "new"]);
        assert_eq!(tips[0].contact, "");
    }

    #[test]
    fn test_non_array_tips_treated_as_empty() {
        let mut store = MemoryStore::with_entries([(TIPS_KEY, r#"{"message":"not a list"}"#)]);
        assert!(load_tips(&store).unwrap().is_empty());

        filled("", "", "only").submit_at(&mut store, &at()).unwrap();
        assert_eq!(load_tips(&store).unwrap().len(), 1);
    }

    #[test]
    fn test_clear_resets_fields_only() {
        let mut store = MemoryStore::new();
        let mut form = filled("a", "b", "c");
        form.clear();
        assert!(form.is_blank());
        assert!(store.get(TIPS_KEY).unwrap().is_none());
        // A cleared form cannot be submitted
        assert_eq!(form.submit_at(&mut store, &at()).unwrap(), SubmitOutcome::Rejected);
    }
}
