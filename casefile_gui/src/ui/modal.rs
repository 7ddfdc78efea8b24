//! Modal dialog component
//!
//! Prompt dialogs for adding list entries and notice dialogs for
//! confirmations and validation messages.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use casefile_core::Action;

use crate::Message;

/// Types of modal dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalType {
    /// Ask for a new list entry
    Prompt {
        target: PromptTarget,
        question: &'static str,
        input: String,
    },
    /// Single-button message
    Notice(String),
}

/// Which list a prompt appends to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTarget {
    Timeline,
    Quote,
}

impl PromptTarget {
    /// The action for a prompt answer; `None` means the dialog was cancelled
    pub fn action(self, input: Option<String>) -> Action {
        match self {
            PromptTarget::Timeline => Action::AddTimeline(input),
            PromptTarget::Quote => Action::AddQuote(input),
        }
    }
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop(modal_type: &ModalType) -> Element<'static, Message> {
    let on_click = match modal_type {
        ModalType::Prompt { .. } => Message::ModalCancel,
        ModalType::Notice(_) => Message::NoticeDismissed,
    };

    button(Space::new())
        .on_press(on_click)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render a modal dialog based on its type
pub fn view_modal(modal_type: &ModalType) -> Element<'_, Message> {
    match modal_type {
        ModalType::Prompt { question, input, .. } => view_prompt_modal(question, input),
        ModalType::Notice(notice) => view_notice_modal(notice),
    }
}

fn view_prompt_modal<'a>(question: &'a str, input: &'a str) -> Element<'a, Message> {
    let field = text_input("", input)
        .on_input(Message::PromptInputChanged)
        .on_submit(Message::PromptConfirm)
        .padding(6)
        .size(13);

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(11))
            .on_press(Message::ModalCancel)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(8),
        button(text("OK").size(11))
            .on_press(Message::PromptConfirm)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let content = column![
        text(question).size(14),
        Space::new().height(12),
        field,
        Space::new().height(16),
        buttons,
    ]
    .width(Length::Fixed(420.0));

    centered(content.into())
}

fn view_notice_modal(notice: &str) -> Element<'_, Message> {
    let content = column![
        text(notice).size(13),
        Space::new().height(16),
        row![
            Space::new().width(Length::Fill),
            button(text("OK").size(11))
                .on_press(Message::NoticeDismissed)
                .padding(Padding::from([6, 16]))
                .style(button::primary),
        ],
    ]
    .width(Length::Fixed(360.0));

    centered(content.into())
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_target_actions() {
        assert_eq!(
            PromptTarget::Timeline.action(Some("Filed".into())),
            Action::AddTimeline(Some("Filed".into()))
        );
        assert_eq!(PromptTarget::Quote.action(None), Action::AddQuote(None));
    }
}
