//! Summary panel: case overview and the "View Timeline" shortcut

use iced::widget::{button, column, text, Column, Space};
use iced::Padding;

use crate::Message;

const OVERVIEW: &str = "This case file collects the public record in one place: a dated \
timeline of events, notable quotes, and a form for sending tips. \
Everything you add is stored on this device only.";

pub fn view() -> Column<'static, Message> {
    column![
        text("Summary").size(20),
        Space::new().height(8),
        text(OVERVIEW).size(13),
        Space::new().height(16),
        button(text("View Timeline").size(12))
            .on_press(Message::ShowTimeline)
            .padding(Padding::from([6, 14]))
            .style(button::primary),
    ]
}
