//! Input view for the Finite Element Model
//!
//! Program picker plus the main input file and post-processing script,
//! each with a Browse button.

use iced::widget::{button, column, pick_list, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use uq_core::panels::{FemPanel, FemProgram, Panel};

use super::shared::form::{labeled_input, section_header};
use crate::Message;

/// Render the FEM editor
pub fn view(panel: &FemPanel) -> Element<'_, Message> {
    let program = row![
        text("Program:").size(11).width(Length::Fixed(120.0)),
        pick_list(FemProgram::ALL, Some(panel.program), Message::FemProgramSelected)
            .text_size(11),
    ]
    .align_y(Alignment::Center);

    column![
        section_header(panel.title(), None),
        Space::new().height(4),
        program,
        with_browse(
            labeled_input("Input File:", &panel.main_input, Message::FemMainInputChanged),
            Message::BrowseMainInput,
        ),
        with_browse(
            labeled_input(
                "Postprocess Script:",
                &panel.postprocess_script,
                Message::FemPostprocessChanged
            ),
            Message::BrowsePostprocess,
        ),
    ]
    .spacing(6)
    .into()
}

fn with_browse(input: Element<'_, Message>, browse: Message) -> Element<'_, Message> {
    row![
        input,
        button(text("Browse").size(10))
            .on_press(browse)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
