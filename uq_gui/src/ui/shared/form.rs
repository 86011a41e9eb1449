//! Form building blocks shared by the input panels

use iced::widget::{button, column, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Panel heading with an optional "+" action on the right
pub fn section_header<'a>(title: &'a str, add_action: Option<Message>) -> Element<'a, Message> {
    let heading = text(title).size(14);
    match add_action {
        Some(action) => row![
            heading,
            Space::new().width(Length::Fill),
            button(text("+").size(11))
                .on_press(action)
                .padding(Padding::from([2, 8]))
                .style(button::secondary),
        ]
        .align_y(Alignment::Center)
        .into(),
        None => heading.into(),
    }
}

/// Helper to create a labeled text input
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(120.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Small input for one numeric value; the label turns red when it will not parse
pub fn numeric_input<'a>(
    label: &'a str,
    value: &'a str,
    valid: bool,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let caption = if valid {
        text(label).size(10)
    } else {
        text(label).size(10).color([0.8, 0.2, 0.2])
    };
    column![
        caption,
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fixed(90.0))
            .padding(4)
            .size(11),
    ]
    .spacing(2)
    .into()
}

/// Row remove button
pub fn remove_button(on_press: Message) -> Element<'static, Message> {
    button(text("Remove").size(10))
        .on_press(on_press)
        .padding(Padding::from([3, 6]))
        .style(button::secondary)
        .into()
}

/// Gray "(none)" placeholder for empty lists
pub fn empty_hint(hint: &str) -> Column<'_, Message> {
    column![text(hint).size(10).color([0.5, 0.5, 0.5])]
}
