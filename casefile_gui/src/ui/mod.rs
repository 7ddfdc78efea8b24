//! UI module for the Case File GUI
//!
//! # Panel Structure
//! - `toolbar` - Title and one navigation button per panel
//! - `summary_panel` - Case overview with the "View Timeline" shortcut
//! - `list_panel` - Timeline and quotes (shared list view + action buttons)
//! - `tip_panel` - Tip form fields and Submit/Clear
//! - `status_bar` - Store location and status messages
//! - `modal` - Prompt and notice dialogs

pub mod list_panel;
pub mod modal;
pub mod status_bar;
pub mod summary_panel;
pub mod tip_panel;
pub mod toolbar;

use iced::widget::{container, operation, scrollable, text, Column};
use iced::{Element, Length, Task};

use casefile_core::navigation::{Navigator, QUOTES_PANEL, SUMMARY_PANEL, TIMELINE_PANEL, TIPS_PANEL};

use crate::{App, Message};

/// Widget id of the scrollable holding the active panel
pub const PANEL_SCROLL_ID: &str = "active-panel";

/// The text input that takes focus when a panel is shown, if it has one
pub fn focus_input(navigator: &Navigator) -> Option<&'static str> {
    match navigator.focused()? {
        TIPS_PANEL if navigator.is_active(TIPS_PANEL) => Some(tip_panel::NAME_INPUT_ID),
        _ => None,
    }
}

/// Bring the freshly shown panel into view and focus its first input
pub fn focus_active_panel(navigator: &Navigator) -> Task<Message> {
    if navigator.active().is_none() {
        return Task::none();
    }
    let scroll = operation::snap_to(PANEL_SCROLL_ID, scrollable::RelativeOffset::START);
    match focus_input(navigator) {
        Some(id) => Task::batch([scroll, operation::focus(id)]),
        None => scroll,
    }
}

/// Render whichever panel the navigator has active
pub fn view_active_panel(app: &App) -> Element<'_, Message> {
    let case_file = &app.case_file;
    let panel: Column<'_, Message> = match case_file.navigator.active().map(|p| p.id.as_str()) {
        Some(SUMMARY_PANEL) => summary_panel::view(),
        Some(TIMELINE_PANEL) => list_panel::view_timeline(&case_file.timeline),
        Some(QUOTES_PANEL) => list_panel::view_quotes(&case_file.quotes),
        Some(TIPS_PANEL) => tip_panel::view(&case_file.tip_form),
        _ => Column::new().push(text("Select a section above").size(14).color([0.5, 0.5, 0.5])),
    };

    container(scrollable(panel.padding(8)).id(PANEL_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
