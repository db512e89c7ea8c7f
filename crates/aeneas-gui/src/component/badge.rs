//! Chips and tool badges.

use aeneas_model::ToolInfo;
use iced::widget::{container, row, text};
use iced::{Alignment, Element};

use crate::theme::{SPACING_XS, container_chip};

/// Outlined pill with a short label.
pub fn chip<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(12))
        .padding([4.0, 12.0])
        .style(container_chip)
        .into()
}

/// A tool name with its icon, as listed in a case study.
pub fn tool_badge<'a, M: 'a>(tool: ToolInfo<'a>) -> Element<'a, M> {
    container(
        row![text(tool.icon).size(12), text(tool.name).size(12)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([4.0, 10.0])
    .style(container_chip)
    .into()
}
