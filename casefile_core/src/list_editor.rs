//! # List Editor
//!
//! An append-only list of rendered fragments mirrored into one store key.
//! The same editor backs the timeline and the quote list; the differences
//! (storage key, prompt, markup wrapper) come from a [`ListKind`].
//!
//! ## Lifecycle
//!
//! ```text
//! startup ── restore() ──> entries == stored snapshot (or untouched on bad data)
//! click   ── append()  ──> entries.push(fragment) ── persist() ──> store[key] = entries
//! ```
//!
//! Persisting always writes the whole list, so after any successful append
//! the store holds exactly the in-memory entries.
//!
//! ## Example
//!
//! ```rust
//! use casefile_core::list_editor::AppendOutcome;
//! use casefile_core::quotes::QuoteList;
//! use casefile_core::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let mut quotes = QuoteList::default();
//!
//! let outcome = quotes.append(&mut store, Some("Keep it simple")).unwrap();
//! assert_eq!(outcome, AppendOutcome::Appended { index: 0 });
//!
//! // Cancelled prompt: nothing happens
//! let outcome = quotes.append(&mut store, None).unwrap();
//! assert_eq!(outcome, AppendOutcome::Cancelled);
//! assert_eq!(quotes.len(), 1);
//! ```

use std::marker::PhantomData;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::dates::DateStyle;
use crate::errors::CaseResult;
use crate::escape::escape_html;
use crate::render;
use crate::store::KeyValueStore;

/// What distinguishes one list editor from another.
pub trait ListKind {
    /// Store key holding the JSON array of fragments
    const STORAGE_KEY: &'static str;

    /// Name used in log lines ("Failed to load timeline: ...")
    const NAME: &'static str;

    /// Question shown when asking the user for a new entry
    const PROMPT: &'static str;

    /// Wrap already-escaped user text in this list's markup
    fn wrap(escaped: &str, now: &DateTime<Local>, dates: &DateStyle) -> String;
}

/// Source of free-text input for an append.
///
/// Returns `Some(text)` when the user confirms and `None` when they cancel.
/// Blocking front ends (a terminal) implement it directly; the GUI drives the
/// same contract through a modal and calls [`ListEditor::append`] with the
/// answer once it arrives.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Option<String>;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn ask(&mut self, question: &str) -> Option<String> {
        self(question)
    }
}

/// Result of an append attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Input was cancelled or empty; nothing changed
    Cancelled,
    /// The entry was added at `index` and the list persisted
    Appended { index: usize },
}

/// Result of the startup restore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No stored value; the list is left as it was
    Missing,
    /// The stored value was unreadable; a warning was logged and the list left as it was
    Corrupt,
    /// The list now holds `count` stored entries
    Restored { count: usize },
}

/// Ordered, append-only list of rendered fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEditor<K: ListKind> {
    entries: Vec<String>,
    dates: DateStyle,
    _kind: PhantomData<K>,
}

impl<K: ListKind> Default for ListEditor<K> {
    fn default() -> Self {
        Self::new(DateStyle::default())
    }
}

impl<K: ListKind> ListEditor<K> {
    /// Create an empty editor that stamps entries with `dates`
    pub fn new(dates: DateStyle) -> Self {
        ListEditor {
            entries: Vec::new(),
            dates,
            _kind: PhantomData,
        }
    }

    /// The question to show the user before an append
    pub fn prompt_text(&self) -> &'static str {
        K::PROMPT
    }

    /// Rendered fragments in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Visible text of each entry, in insertion order
    pub fn display(&self) -> Vec<String> {
        render::display_list(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append user input stamped with the current local time.
    ///
    /// See [`ListEditor::append_at`].
    pub fn append<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        input: Option<&str>,
    ) -> CaseResult<AppendOutcome> {
        self.append_at(store, input, &Local::now())
    }

    /// Append user input as a new entry and persist the list.
    ///
    /// `None` and `Some("")` abort with no side effect. Any other text,
    /// whitespace included, is escaped, wrapped and pushed to the end.
    pub fn append_at<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        input: Option<&str>,
        now: &DateTime<Local>,
    ) -> CaseResult<AppendOutcome> {
        let text = match input {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(AppendOutcome::Cancelled),
        };

        let fragment = K::wrap(&escape_html(text), now, &self.dates);
        self.entries.push(fragment);
        self.persist(store)?;

        Ok(AppendOutcome::Appended {
            index: self.entries.len() - 1,
        })
    }

    /// Ask `prompt` for the entry text, then append it.
    pub fn append_from<S, P>(&mut self, store: &mut S, prompt: &mut P) -> CaseResult<AppendOutcome>
    where
        S: KeyValueStore + ?Sized,
        P: Prompt + ?Sized,
    {
        let answer = prompt.ask(K::PROMPT);
        self.append(store, answer.as_deref())
    }

    /// Overwrite the store key with the full list.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> CaseResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set(K::STORAGE_KEY, &json)?;
        log::debug!("Persisted {} {} entries", self.entries.len(), K::NAME);
        Ok(())
    }

    /// Reload the list from the store.
    ///
    /// An absent or empty value leaves the list alone. A value that is not a
    /// JSON array is logged and also leaves the list alone; the stored value
    /// is not repaired. Otherwise the list is replaced by the stored entries,
    /// order preserved: strings verbatim, other elements as their JSON text.
    /// Only store I/O failures are errors.
    pub fn restore<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> CaseResult<RestoreOutcome> {
        let raw = match store.get(K::STORAGE_KEY)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(RestoreOutcome::Missing),
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                log::warn!("Failed to load {}: expected an array, found {}", K::NAME, kind_of(&other));
                return Ok(RestoreOutcome::Corrupt);
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", K::NAME, e);
                return Ok(RestoreOutcome::Corrupt);
            }
        };

        self.entries = items
            .into_iter()
            .map(|item| match item {
                Value::String(fragment) => fragment,
                other => other.to_string(),
            })
            .collect();
        Ok(RestoreOutcome::Restored {
            count: self.entries.len(),
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
