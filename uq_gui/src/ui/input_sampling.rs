//! Input view for the Sampling Method

use iced::widget::{column, pick_list, row, text, Space};
use iced::{Alignment, Element, Length};

use uq_core::panels::{Panel, SamplingMethod, SamplingPanel};

use super::shared::form::{numeric_input, section_header};
use crate::forms::FormDrafts;
use crate::Message;

/// Render the sampling method editor
pub fn view<'a>(panel: &'a SamplingPanel, drafts: &'a FormDrafts) -> Element<'a, Message> {
    let samples_valid = matches!(drafts.samples.trim().parse::<u32>(), Ok(n) if n > 0);
    let seed_valid = drafts.seed.trim().parse::<u64>().is_ok();

    column![
        section_header(panel.title(), None),
        Space::new().height(4),
        row![
            text("Method:").size(11).width(Length::Fixed(120.0)),
            pick_list(SamplingMethod::ALL, Some(panel.method), Message::SamplingMethodSelected)
                .text_size(11),
        ]
        .align_y(Alignment::Center),
        row![
            numeric_input("Samples", &drafts.samples, samples_valid, Message::SamplesChanged),
            numeric_input("Seed", &drafts.seed, seed_valid, Message::SeedChanged),
        ]
        .spacing(12),
    ]
    .spacing(6)
    .into()
}
