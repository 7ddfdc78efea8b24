//! Toolbar component
//!
//! Title row plus one button per panel; the active panel's button is highlighted.

use iced::widget::{button, row, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use casefile_core::navigation::Navigator;

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Case File").size(28),
        Space::new().width(Length::Fill),
        text("Stored locally on this device").size(12).color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the navigation buttons
pub fn view_nav(navigator: &Navigator) -> Element<'_, Message> {
    let mut buttons: Row<'_, Message> = row![].spacing(4);

    for panel in navigator.panels() {
        buttons = buttons.push(
            button(text(panel.label.as_str()).size(12))
                .on_press(Message::Navigate(panel.id.clone()))
                .padding(Padding::from([4, 10]))
                .style(if panel.active { button::primary } else { button::secondary }),
        );
    }

    buttons
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center)
        .into()
}
