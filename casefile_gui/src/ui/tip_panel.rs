//! Tip form panel

use iced::widget::{button, column, row, text, text_input, Column, Space};
use iced::{Length, Padding};

use casefile_core::tips::TipForm;

use crate::Message;

/// Widget id of the name field, focused when the panel is shown
pub const NAME_INPUT_ID: &str = "tip-name";
const CONTACT_INPUT_ID: &str = "tip-contact";
const MESSAGE_INPUT_ID: &str = "tip-message";

pub fn view(form: &TipForm) -> Column<'_, Message> {
    let buttons = row![
        button(text("Submit").size(12))
            .on_press(Message::SubmitTip)
            .padding(Padding::from([6, 14]))
            .style(button::primary),
        Space::new().width(8),
        button(text("Clear").size(12))
            .on_press(Message::ClearTip)
            .padding(Padding::from([6, 14]))
            .style(button::secondary),
    ];

    column![
        text("Send a Tip").size(20),
        Space::new().height(8),
        field("Name (optional)", NAME_INPUT_ID, &form.name, Message::TipNameChanged),
        field("Contact (optional)", CONTACT_INPUT_ID, &form.contact, Message::TipContactChanged),
        field("Message", MESSAGE_INPUT_ID, &form.message, Message::TipMessageChanged),
        Space::new().height(12),
        buttons,
    ]
    .spacing(6)
}

fn field<'a>(
    label: &'static str,
    id: &'static str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Column<'a, Message> {
    column![
        text(label).size(11),
        text_input("", value)
            .id(id)
            .on_input(on_input)
            .padding(6)
            .size(13)
            .width(Length::Fill),
    ]
    .spacing(2)
}
