//! Timeline and quotes panels
//!
//! Both lists show their stored fragments as plain text, newest last,
//! above the panel's action buttons.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Element, Length, Padding};

use casefile_core::quotes::QuoteList;
use casefile_core::timeline::Timeline;

use crate::Message;

pub fn view_timeline(timeline: &Timeline) -> Column<'_, Message> {
    let actions = row![
        action_button("Add Event", Message::AddTimeline),
        Space::new().width(8),
        action_button("Export JSON", Message::ExportTimeline),
    ];

    column![
        text("Timeline").size(20),
        Space::new().height(8),
        view_rows(timeline.display(), "No events yet."),
        Space::new().height(12),
        actions,
    ]
}

pub fn view_quotes(quotes: &QuoteList) -> Column<'_, Message> {
    column![
        text("Quotes").size(20),
        Space::new().height(8),
        view_rows(quotes.display(), "No quotes yet."),
        Space::new().height(12),
        action_button("Add Quote", Message::AddQuote),
    ]
}

fn view_rows(rows: Vec<String>, empty: &'static str) -> Element<'static, Message> {
    if rows.is_empty() {
        return text(empty).size(12).color([0.5, 0.5, 0.5]).into();
    }

    let mut list = Column::new().spacing(4);
    for entry in rows {
        list = list.push(
            container(text(entry).size(13))
                .width(Length::Fill)
                .padding(Padding::from([6, 8]))
                .style(container::bordered_box),
        );
    }
    list.into()
}

fn action_button(label: &'static str, message: Message) -> iced::widget::Button<'static, Message> {
    button(text(label).size(12))
        .on_press(message)
        .padding(Padding::from([6, 14]))
        .style(button::secondary)
}
