//! Status Bar (Bottom)
//!
//! Displays:
//! - Where entries are being stored
//! - Status messages (export results, load problems)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(store_label: &'a str, status: &'a str) -> Element<'a, Message> {
    row![
        text(format!("Store: {}", store_label)).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
