//! Hero section: brand line, headline, pitch and service chips.

use aeneas_core::ShowcaseView;
use iced::widget::{Row, Space, column, row, text};
use iced::{Alignment, Element};

use super::active_colors;
use crate::component::{chip, spans};
use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, text_secondary};

pub(super) fn view_hero<'a>(model: &ShowcaseView<'a>) -> Element<'a, Message> {
    let copy = model.copy;
    let colors = active_colors(model);

    let brand = row![
        text(copy.brand_name).size(16),
        Space::new().width(SPACING_SM),
        chip(copy.brand_tag),
    ]
    .align_y(Alignment::Center);

    let chips = Row::with_children(copy.hero_chips.iter().copied().map(chip))
        .spacing(SPACING_SM)
        .wrap();

    column![
        brand,
        Space::new().height(SPACING_LG),
        text(copy.hero_headline).size(40),
        spans(copy.hero_body, 17.0, colors.accent),
        Space::new().height(SPACING_SM),
        chips,
        text(model.mode.chip_label).size(13).style(text_secondary),
    ]
    .spacing(SPACING_MD)
    .into()
}
