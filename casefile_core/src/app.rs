//! # Application State
//!
//! [`CaseFile`] wires the store, the navigator and the three editors together.
//! Front ends translate their UI events into [`Action`]s and render whatever
//! [`Effect`] comes back; none of them touch the store directly.
//!
//! ## Example
//!
//! ```rust
//! use casefile_core::app::{Action, CaseFile, Effect};
//! use casefile_core::dates::DateStyle;
//! use casefile_core::store::MemoryStore;
//!
//! let (mut app, _report) = CaseFile::startup(MemoryStore::new(), DateStyle::default()).unwrap();
//!
//! app.dispatch(Action::AddQuote(Some("Truth will out".into()))).unwrap();
//! app.tip_form.message = String::new();
//! let effect = app.dispatch(Action::SubmitTip).unwrap();
//! assert_eq!(effect, Effect::Notice("Message is required.".into()));
//! ```

use chrono::{DateTime, Local};

use crate::dates::DateStyle;
use crate::errors::CaseResult;
use crate::list_editor::{AppendOutcome, Prompt, RestoreOutcome};
use crate::navigation::{Navigator, TIMELINE_PANEL};
use crate::quotes::QuoteList;
use crate::store::KeyValueStore;
use crate::timeline::{Download, Timeline};
use crate::tips::{load_tips, SubmitOutcome, TipForm, TipRecord};

/// Every user-triggered operation of the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A navigation control carrying a target panel id
    Navigate(String),
    /// The "View Timeline" shortcut on the summary panel
    ShowTimeline,
    /// Answer to the timeline prompt (`None` when cancelled)
    AddTimeline(Option<String>),
    ExportTimeline,
    /// Answer to the quote prompt (`None` when cancelled)
    AddQuote(Option<String>),
    /// Submit the current tip form fields
    SubmitTip,
    /// Reset the tip form fields
    ClearTip,
}

/// What the front end must do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond re-rendering
    None,
    /// Show a blocking notice to the user
    Notice(String),
    /// Offer a file to the user
    Download(Download),
}

/// Outcome of restoring both lists at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupReport {
    pub timeline: RestoreOutcome,
    pub quotes: RestoreOutcome,
}

/// The whole site state over one store.
pub struct CaseFile<S: KeyValueStore> {
    store: S,
    pub navigator: Navigator,
    pub timeline: Timeline,
    pub quotes: QuoteList,
    pub tip_form: TipForm,
}

impl<S: KeyValueStore> CaseFile<S> {
    /// Create the site with empty lists. Call [`CaseFile::restore`] to load saved entries.
    pub fn new(store: S, dates: DateStyle) -> Self {
        CaseFile {
            store,
            navigator: Navigator::site_default(),
            timeline: Timeline::new(dates.clone()),
            quotes: QuoteList::new(dates.clone()),
            tip_form: TipForm::new(dates),
        }
    }

    /// Create the site and restore both lists from the store
    pub fn startup(store: S, dates: DateStyle) -> CaseResult<(Self, StartupReport)> {
        let mut app = Self::new(store, dates);
        let report = app.restore()?;
        Ok((app, report))
    }

    /// Restore the timeline and the quotes independently.
    pub fn restore(&mut self) -> CaseResult<StartupReport> {
        let timeline = self.timeline.restore(&self.store)?;
        let quotes = self.quotes.restore(&self.store)?;
        Ok(StartupReport { timeline, quotes })
    }

    /// Apply an action stamped with the current local time
    pub fn dispatch(&mut self, action: Action) -> CaseResult<Effect> {
        self.dispatch_at(action, &Local::now())
    }

    pub fn dispatch_at(&mut self, action: Action, now: &DateTime<Local>) -> CaseResult<Effect> {
        match action {
            Action::Navigate(id) => {
                self.navigator.show(&id);
                Ok(Effect::None)
            }
            Action::ShowTimeline => {
                self.navigator.show(TIMELINE_PANEL);
                Ok(Effect::None)
            }
            Action::AddTimeline(input) => {
                self.add_timeline_at(input.as_deref(), now)?;
                Ok(Effect::None)
            }
            Action::ExportTimeline => Ok(Effect::Download(self.timeline.export()?)),
            Action::AddQuote(input) => {
                self.add_quote_at(input.as_deref(), now)?;
                Ok(Effect::None)
            }
            Action::SubmitTip => {
                let outcome = self.submit_tip_at(now)?;
                Ok(Effect::Notice(outcome.notice().to_string()))
            }
            Action::ClearTip => {
                self.tip_form.clear();
                Ok(Effect::None)
            }
        }
    }

    /// Append an answer to the timeline prompt
    pub fn add_timeline(&mut self, input: Option<&str>) -> CaseResult<AppendOutcome> {
        self.add_timeline_at(input, &Local::now())
    }

    pub fn add_timeline_at(&mut self, input: Option<&str>, now: &DateTime<Local>) -> CaseResult<AppendOutcome> {
        let outcome = self.timeline.append_at(&mut self.store, input, now)?;
        log_append("timeline", outcome);
        Ok(outcome)
    }

    /// Append an answer to the quote prompt
    pub fn add_quote(&mut self, input: Option<&str>) -> CaseResult<AppendOutcome> {
        self.add_quote_at(input, &Local::now())
    }

    pub fn add_quote_at(&mut self, input: Option<&str>, now: &DateTime<Local>) -> CaseResult<AppendOutcome> {
        let outcome = self.quotes.append_at(&mut self.store, input, now)?;
        log_append("quotes", outcome);
        Ok(outcome)
    }

    /// Submit the tip form as it currently stands
    pub fn submit_tip(&mut self) -> CaseResult<SubmitOutcome> {
        self.submit_tip_at(&Local::now())
    }

    pub fn submit_tip_at(&mut self, now: &DateTime<Local>) -> CaseResult<SubmitOutcome> {
        self.tip_form.submit_at(&mut self.store, now)
    }

    /// Ask `prompt` for a timeline event and append it
    pub fn add_timeline_from<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> CaseResult<AppendOutcome> {
        let outcome = self.timeline.append_from(&mut self.store, prompt)?;
        log_append("timeline", outcome);
        Ok(outcome)
    }

    /// Ask `prompt` for a quote and append it
    pub fn add_quote_from<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> CaseResult<AppendOutcome> {
        let outcome = self.quotes.append_from(&mut self.store, prompt)?;
        log_append("quotes", outcome);
        Ok(outcome)
    }

    /// Tips saved so far
    pub fn tips(&self) -> CaseResult<Vec<TipRecord>> {
        load_tips(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn log_append(list: &str, outcome: AppendOutcome) {
    match outcome {
        AppendOutcome::Cancelled => log::debug!("Append to {} cancelled", list),
        AppendOutcome::Appended { index } => log::info!("Added {} entry #{}", list, index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{QUOTES_PANEL, SUMMARY_PANEL};
    use crate::store::{MemoryStore, QUOTES_KEY, TIMELINE_KEY, TIPS_KEY};
    use crate::tips::TIP_SAVED;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap()
    }

    fn fresh() -> CaseFile<MemoryStore> {
        CaseFile::startup(MemoryStore::new(), DateStyle::default()).unwrap().0
    }

    #[test]
    fn test_startup_restores_each_list_independently() {
        let store = MemoryStore::with_entries([
            (TIMELINE_KEY, r#"["<strong>5/1/2026:</strong> kept"]"#),
            (QUOTES_KEY, "{not json"),
        ]);

        let (app, report) = CaseFile::startup(store, DateStyle::default()).unwrap();

        assert_eq!(report.timeline, RestoreOutcome::Restored { count: 1 });
        assert_eq!(report.quotes, RestoreOutcome::Corrupt);
        assert_eq!(app.timeline.len(), 1);
        assert!(app.quotes.is_empty());
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = fresh();
        assert!(app.navigator.is_active(SUMMARY_PANEL));

        app.dispatch_at(Action::ShowTimeline, &at()).unwrap();
        assert!(app.navigator.is_active(TIMELINE_PANEL));

        app.dispatch_at(Action::Navigate(QUOTES_PANEL.into()), &at()).unwrap();
        assert!(app.navigator.is_active(QUOTES_PANEL));
    }

    #[test]
    fn test_add_and_export_timeline() {
        let mut app = fresh();
        app.dispatch_at(Action::AddTimeline(Some("one".into())), &at()).unwrap();
        app.dispatch_at(Action::AddTimeline(None), &at()).unwrap();
        app.dispatch_at(Action::AddTimeline(Some("two".into())), &at()).unwrap();

        let Effect::Download(download) = app.dispatch_at(Action::ExportTimeline, &at()).unwrap() else {
            panic!("expected a download");
        };
        let texts: Vec<String> = serde_json::from_str(&download.contents).unwrap();
        assert_eq!(texts, vec!["5/1/2026: one", "5/1/2026: two"]);
    }

    #[test]
    fn test_tip_flow_notices() {
        let mut app = fresh();

        let rejected = app.dispatch_at(Action::SubmitTip, &at()).unwrap();
        assert_eq!(rejected, Effect::Notice("Message is required.".into()));
        assert!(app.store().get(TIPS_KEY).unwrap().is_none());

        app.tip_form.name = "Sam".into();
        app.tip_form.message = "Hello".into();
        let saved = app.dispatch_at(Action::SubmitTip, &at()).unwrap();
        assert_eq!(saved, Effect::Notice(TIP_SAVED.into()));
        assert_eq!(app.tips().unwrap()[0].name, "Sam");
        assert!(app.tip_form.is_blank());

        app.tip_form.contact = "x".into();
        app.dispatch_at(Action::ClearTip, &at()).unwrap();
        assert!(app.tip_form.is_blank());
        assert_eq!(app.tips().unwrap().len(), 1);
    }

    #[test]
    fn test_add_from_prompt() {
        let mut app = fresh();
        let mut cancel = |_: &str| -> Option<String> { None };
        assert_eq!(app.add_quote_from(&mut cancel).unwrap(), AppendOutcome::Cancelled);

        let mut answer = |q: &str| Some(format!("answer to {}", q));
        assert_eq!(
            app.add_timeline_from(&mut answer).unwrap(),
            AppendOutcome::Appended { index: 0 }
        );
        assert!(app.timeline.display()[0].ends_with("answer to Enter a new timeline event:"));
        assert!(app.quotes.is_empty());
    }

    #[test]
    fn test_state_survives_restart() {
        let mut app = fresh();
        app.dispatch_at(Action::AddQuote(Some("q1".into())), &at()).unwrap();
        app.dispatch_at(Action::AddTimeline(Some("t1".into())), &at()).unwrap();
        let store = app.into_store();

        let (reopened, _) = CaseFile::startup(store, DateStyle::default()).unwrap();
        assert_eq!(reopened.quotes.len(), 1);
        assert_eq!(reopened.timeline.display(), vec!["5/1/2026: t1"]);
    }
}
