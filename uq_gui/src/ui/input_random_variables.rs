//! Input view for Random Variables
//!
//! One row per variable: name, distribution picker, the distribution's
//! parameters, and a remove button.

use iced::widget::{column, pick_list, row, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use uq_core::panels::{DistributionKind, Panel, RandomVariable, RandomVariablePanel};

use super::shared::form::{empty_hint, numeric_input, remove_button, section_header};
use crate::forms::{parse_f64, FormDrafts};
use crate::Message;

/// Render the random variable editor
pub fn view<'a>(panel: &'a RandomVariablePanel, drafts: &'a FormDrafts) -> Element<'a, Message> {
    let mut content: Column<'a, Message> = column![section_header(
        panel.title(),
        Some(Message::AddRandomVariable)
    )]
    .spacing(6);

    if panel.is_empty() {
        content = content.push(empty_hint("(none) - click '+' to add a random variable"));
    }

    for (index, variable) in panel.variables().iter().enumerate() {
        content = content.push(view_row(index, variable, drafts));
    }

    content.into()
}

fn view_row<'a>(
    index: usize,
    variable: &'a RandomVariable,
    drafts: &'a FormDrafts,
) -> Element<'a, Message> {
    let name = text_input("Name", &variable.name)
        .on_input(move |name| Message::RvNameChanged(index, name))
        .width(Length::Fixed(120.0))
        .padding(4)
        .size(11);

    let kind = pick_list(
        DistributionKind::ALL,
        Some(variable.distribution.kind()),
        move |kind| Message::RvKindSelected(index, kind),
    )
    .text_size(11)
    .width(Length::Fixed(110.0));

    let params = variable
        .distribution
        .parameters()
        .into_iter()
        .enumerate()
        .fold(Row::new().spacing(6), |params, (parameter, (label, _))| {
            let draft = drafts.rv_param(index, parameter);
            params.push(numeric_input(
                label,
                draft,
                parse_f64(draft).is_some(),
                move |value| Message::RvParamChanged(index, parameter, value),
            ))
        });

    row![name, kind, params, remove_button(Message::RemoveRandomVariable(index))]
        .spacing(8)
        .align_y(Alignment::End)
        .into()
}
