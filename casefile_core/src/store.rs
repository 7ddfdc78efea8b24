//! # Key-Value Store
//!
//! Every piece of persisted state lives behind [`KeyValueStore`]: a string-keyed
//! map whose values are JSON documents serialized to strings. Each editor owns
//! one key and overwrites it with a full snapshot on every mutation.
//!
//! Implementations:
//! - [`MemoryStore`] - in-process map, used by tests and as a fallback
//! - [`crate::file_io::FileStore`] - atomic JSON file with a single-writer lock (native)
//! - browser `localStorage` (provided by the WASM front end)
//!
//! ## Example
//!
//! ```rust
//! use casefile_core::store::{KeyValueStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.set("quotesData", "[]").unwrap();
//! assert_eq!(store.get("quotesData").unwrap().as_deref(), Some("[]"));
//! ```

use std::collections::BTreeMap;

use crate::errors::CaseResult;

/// Storage key holding the rendered timeline fragments
pub const TIMELINE_KEY: &str = "timelineItems";

/// Storage key holding the rendered quote fragments
pub const QUOTES_KEY: &str = "quotesData";

/// Storage key holding the array of submitted tips
pub const TIPS_KEY: &str = "tipsData";

/// String-keyed store of serialized values.
///
/// `set` is a full replacement of the value under `key`. Implementations must
/// make a successful `set` visible to every later `get` on the same store.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any
    fn get(&self, key: &str) -> CaseResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> CaseResult<()>;

    /// Delete `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> CaseResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> CaseResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> CaseResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> CaseResult<()> {
        (**self).remove(key)
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(key, value)` pairs
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        MemoryStore {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no key is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CaseResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CaseResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CaseResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set(TIMELINE_KEY, "[\"a\"]").unwrap();
        store.set(TIMELINE_KEY, "[\"a\",\"b\"]").unwrap();
        assert_eq!(store.get(TIMELINE_KEY).unwrap().as_deref(), Some("[\"a\",\"b\"]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_key_and_remove() {
        let mut store = MemoryStore::with_entries([(QUOTES_KEY, "[]")]);
        assert_eq!(store.get(TIPS_KEY).unwrap(), None);
        store.remove(QUOTES_KEY).unwrap();
        store.remove(QUOTES_KEY).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set(TIPS_KEY, "[]").unwrap();
        assert_eq!(store.get(TIPS_KEY).unwrap().as_deref(), Some("[]"));
    }
}
