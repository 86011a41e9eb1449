//! Toolbar component
//!
//! The File menu as a row of buttons, in menu order, plus the theme toggle.

use iced::widget::{button, row, text, tooltip, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use uq_core::session::Command;

use crate::Message;

/// Render the toolbar with file commands and the theme toggle
pub fn view_toolbar(dark_mode: bool) -> Element<'static, Message> {
    let file_buttons = Command::ALL
        .iter()
        .fold(Row::new().spacing(4), |buttons, command| {
            buttons.push(command_button(*command))
        });

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        file_buttons,
        Space::new().width(Length::Fill),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

fn command_button(command: Command) -> Element<'static, Message> {
    let style = if command == Command::Save {
        button::primary
    } else {
        button::secondary
    };
    let btn = button(text(command.label()).size(11))
        .on_press(Message::Command(command))
        .padding(Padding::from([4, 8]))
        .style(style);

    tooltip(
        btn,
        text(format!("{} ({})", command.status_tip(), command.shortcut())).size(10),
        tooltip::Position::Bottom,
    )
    .into()
}
