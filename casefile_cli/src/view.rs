//! Plain-text rendering of the site for the terminal.

use casefile_core::errors::CaseResult;
use casefile_core::navigation::{QUOTES_PANEL, SUMMARY_PANEL, TIMELINE_PANEL, TIPS_PANEL};
use casefile_core::{CaseFile, KeyValueStore};

const SUMMARY: &[&str] = &[
    "This case file collects the public record in one place: a dated",
    "timeline of events, notable quotes, and a form for sending tips.",
    "Everything you add is stored on this machine only.",
];

/// Navigation bar with the active panel in brackets
pub fn nav_bar<S: KeyValueStore>(app: &CaseFile<S>) -> String {
    app.navigator
        .panels()
        .iter()
        .map(|p| {
            if p.active {
                format!("[{}]", p.label)
            } else {
                format!(" {} ", p.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Body of the active panel
pub fn active_panel<S: KeyValueStore>(app: &CaseFile<S>) -> CaseResult<String> {
    let Some(panel) = app.navigator.active() else {
        return Ok("(no panel selected)".to_string());
    };

    let mut out = vec![panel.label.to_uppercase(), String::new()];
    match panel.id.as_str() {
        SUMMARY_PANEL => {
            out.extend(SUMMARY.iter().map(|l| l.to_string()));
            out.push(String::new());
            out.push("Type `view-timeline` to jump to the timeline.".to_string());
        }
        TIMELINE_PANEL => out.extend(numbered(&app.timeline.display(), "(no events yet)")),
        QUOTES_PANEL => out.extend(numbered(&app.quotes.display(), "(no quotes yet)")),
        TIPS_PANEL => {
            let form = &app.tip_form;
            out.push(format!("Name:    {}", form.name));
            out.push(format!("Contact: {}", form.contact));
            out.push(format!("Message: {}", form.message));
            out.push(String::new());
            out.push(format!("{} tip(s) saved on this machine.", app.tips()?.len()));
        }
        _ => {}
    }
    Ok(out.join("\n"))
}

/// Numbered rows; multi-line rows are indented under their number
pub fn numbered(rows: &[String], empty: &str) -> Vec<String> {
    if rows.is_empty() {
        return vec![empty.to_string()];
    }
    rows.iter()
        .enumerate()
        .map(|(i, row)| format!("{:>3}. {}", i + 1, row.replace('\n', "\n     ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use casefile_core::dates::DateStyle;
    use casefile_core::{Action, MemoryStore};

    fn app() -> CaseFile<MemoryStore> {
        CaseFile::new(MemoryStore::new(), DateStyle::default())
    }

    #[test]
    fn test_nav_bar_marks_active() {
        let app = app();
        assert!(nav_bar(&app).starts_with("[Summary]"));
    }

    #[test]
    fn test_quotes_panel_lists_entries() {
        let mut app = app();
        app.dispatch(Action::AddQuote(Some("Short".into()))).unwrap();
        app.dispatch(Action::Navigate(QUOTES_PANEL.into())).unwrap();

        let body = active_panel(&app).unwrap();
        assert!(body.starts_with("QUOTES"));
        assert!(body.contains("  1. \"Short\"\n     — User added"));
    }

    #[test]
    fn test_unknown_panel_shows_nothing_selected() {
        let mut app = app();
        app.dispatch(Action::Navigate("nowhere".into())).unwrap();
        assert_eq!(active_panel(&app).unwrap(), "(no panel selected)");
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(numbered(&[], "(none)"), vec!["(none)"]);
    }
}
