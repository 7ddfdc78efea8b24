//! Quote list: user-added quotations rendered as a paragraph plus attribution.

use chrono::{DateTime, Local};

use crate::dates::DateStyle;
use crate::list_editor::{ListEditor, ListKind};
use crate::store::QUOTES_KEY;

/// Attribution appended to every quote added through the editor
pub const USER_ATTRIBUTION: &str = "— User added";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteKind;

impl ListKind for QuoteKind {
    const STORAGE_KEY: &'static str = QUOTES_KEY;
    const NAME: &'static str = "quotes";
    const PROMPT: &'static str = "Enter a short quote (25 words max):";

    fn wrap(escaped: &str, _now: &DateTime<Local>, _dates: &DateStyle) -> String {
        format!("<p>\"{}\"</p><footer>{}</footer>", escaped, USER_ATTRIBUTION)
    }
}

pub type QuoteList = ListEditor<QuoteKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_editor::RestoreOutcome;
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn test_quote_markup_and_display() {
        let mut store = MemoryStore::new();
        let mut quotes = QuoteList::default();
        quotes.append(&mut store, Some("It's <fine>")).unwrap();

        assert_eq!(
            quotes.entries()[0],
            "<p>\"It&#39;s &lt;fine&gt;\"</p><footer>— User added</footer>"
        );
        assert_eq!(quotes.display(), vec!["\"It's <fine>\"\n— User added"]);
    }

    #[test]
    fn test_persist_restore_roundtrip() {
        let mut store = MemoryStore::new();
        let mut quotes = QuoteList::default();
        quotes.append(&mut store, Some("one")).unwrap();
        quotes.append(&mut store, Some("two")).unwrap();

        let mut reloaded = QuoteList::default();
        assert_eq!(reloaded.restore(&store).unwrap(), RestoreOutcome::Restored { count: 2 });
        assert_eq!(reloaded.entries(), quotes.entries());
        assert!(store.get(QUOTES_KEY).unwrap().unwrap().starts_with("[\"<p>"));
    }

    #[test]
    fn test_invalid_json_leaves_list_empty() {
        let store = MemoryStore::with_entries([(QUOTES_KEY, "{not json")]);
        let mut quotes = QuoteList::default();
        assert_eq!(quotes.restore(&store).unwrap(), RestoreOutcome::Corrupt);
        assert!(quotes.is_empty());
    }
}
