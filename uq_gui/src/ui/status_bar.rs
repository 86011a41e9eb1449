//! Status Bar (Bottom)
//!
//! Displays:
//! - Current file path (`untitled.json` when unsaved)
//! - Modified indicator (*)
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(
    file_label: String,
    is_modified: bool,
    status: &str,
) -> Element<'_, Message> {
    let modified_indicator = if is_modified { " *" } else { "" };

    row![
        text(format!("{}{}", file_label, modified_indicator)).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
