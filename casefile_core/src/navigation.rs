//! # Navigation
//!
//! The site is a set of labeled panels of which at most one is shown.
//! [`Navigator::show`] switches panels: every panel is deactivated, the one
//! with the requested id (if any) is activated and receives focus.
//!
//! ## Example
//!
//! ```rust
//! use casefile_core::navigation::{Navigator, TIMELINE_PANEL};
//!
//! let mut nav = Navigator::site_default();
//! assert_eq!(nav.active().map(|p| p.id.as_str()), Some("summary"));
//!
//! nav.show(TIMELINE_PANEL);
//! assert_eq!(nav.focused(), Some("timeline"));
//! ```

use serde::{Deserialize, Serialize};

pub const SUMMARY_PANEL: &str = "summary";
pub const TIMELINE_PANEL: &str = "timeline";
pub const QUOTES_PANEL: &str = "quotes";
pub const TIPS_PANEL: &str = "tips";

/// Panels of the default site: (id, label, active by default)
const SITE_PANELS: &[(&str, &str, bool)] = &[
    (SUMMARY_PANEL, "Summary", true),
    (TIMELINE_PANEL, "Timeline", false),
    (QUOTES_PANEL, "Quotes", false),
    (TIPS_PANEL, "Submit a Tip", false),
];

/// A labeled content region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    pub label: String,
    pub active: bool,
}

impl Panel {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Panel {
            id: id.into(),
            label: label.into(),
            active: false,
        }
    }

    /// Mark this panel as the one shown at startup
    pub fn active_by_default(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Switches between panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    panels: Vec<Panel>,
    focused: Option<String>,
}

impl Navigator {
    /// Build a navigator; the initial state is whatever the panels declare.
    ///
    /// If several panels claim to be active, only the first keeps the flag.
    pub fn new(mut panels: Vec<Panel>) -> Self {
        let mut seen_active = false;
        for panel in &mut panels {
            if panel.active && seen_active {
                panel.active = false;
            }
            seen_active |= panel.active;
        }
        Navigator {
            panels,
            focused: None,
        }
    }

    /// The four panels of the case file site, summary shown first
    pub fn site_default() -> Self {
        Self::new(
            SITE_PANELS
                .iter()
                .map(|&(id, label, active)| {
                    let panel = Panel::new(id, label);
                    if active {
                        panel.active_by_default()
                    } else {
                        panel
                    }
                })
                .collect(),
        )
    }

    /// Show the panel with `id`.
    ///
    /// All panels are deactivated first. Returns `false` when no panel has
    /// that id; every panel then stays inactive and focus does not move.
    pub fn show(&mut self, id: &str) -> bool {
        for panel in &mut self.panels {
            panel.active = false;
        }

        match self.panels.iter_mut().find(|p| p.id == id) {
            Some(panel) => {
                panel.active = true;
                self.focused = Some(panel.id.clone());
                true
            }
            None => {
                log::debug!("No panel with id '{}'", id);
                false
            }
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The panel currently shown, if any
    pub fn active(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.active)
    }

    /// Id of the panel that last received focus
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|p| p.id == id)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::site_default()
    }
}
