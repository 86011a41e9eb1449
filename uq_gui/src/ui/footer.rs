//! Footer (Bottom)
//!
//! Funding acknowledgement. Display only.

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::Message;

const ACKNOWLEDGEMENT: &str =
    "This work is based on material supported by the National Science Foundation under grant 1612843";

pub fn view_footer() -> Element<'static, Message> {
    container(text(ACKNOWLEDGEMENT).size(10).color([0.45, 0.45, 0.45]))
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}
