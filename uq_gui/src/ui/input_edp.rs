//! Input view for Engineering Demand Parameters

use iced::widget::{column, row, text_input, Column};
use iced::{Alignment, Element, Length};

use uq_core::panels::{EdpPanel, Panel};

use super::shared::form::{empty_hint, remove_button, section_header};
use crate::Message;

/// Render the EDP list editor
pub fn view(panel: &EdpPanel) -> Element<'_, Message> {
    let mut content: Column<'_, Message> =
        column![section_header(panel.title(), Some(Message::AddEdp))].spacing(6);

    if panel.is_empty() {
        content = content.push(empty_hint("(none) - click '+' to add an EDP"));
    }

    for (index, edp) in panel.entries().iter().enumerate() {
        content = content.push(
            row![
                text_input("EDP name", &edp.name)
                    .on_input(move |name| Message::EdpNameChanged(index, name))
                    .width(Length::Fixed(240.0))
                    .padding(4)
                    .size(11),
                remove_button(Message::RemoveEdp(index)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }

    content.into()
}
