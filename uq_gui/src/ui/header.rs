//! Header (Top)
//!
//! Static heading; no state.

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

pub const HEADING: &str = "DAKOTA-FEM Uncertainty Quantification Application";

/// Render the application header
pub fn view_header(heading: &str) -> Element<'_, Message> {
    row![
        text(heading).size(22),
        Space::new().width(Length::Fill),
        text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(11).color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center)
    .into()
}
