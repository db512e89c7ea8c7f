//! Studio Lab: freelance work, proposals and reports.

use aeneas_core::{LabCard, ShowcaseView};
use aeneas_model::PENDING_CASE_STUDY;
use iced::widget::{Column, Row, Space, button, column, container, row, space, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::active_colors;
use crate::component::chip;
use crate::message::Message;
use crate::theme::{
    LAB_CARD_WIDTH, ModeColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_accent,
    container_card, text_muted, text_secondary,
};

pub(super) fn view_lab<'a>(model: &ShowcaseView<'a>) -> Element<'a, Message> {
    let copy = model.copy;
    let colors = active_colors(model);

    let title = Column::with_children(
        copy.lab_title
            .iter()
            .map(|line| text(*line).size(32).into()),
    );

    let header = column![
        text(copy.lab_label).size(12).color(colors.accent),
        title,
        text(copy.lab_body).size(15).style(text_secondary),
        text(copy.lab_keywords).size(11).style(text_muted),
    ]
    .spacing(SPACING_SM);

    let cards = Row::with_children(model.lab.iter().map(|card| lab_card(*card, colors)))
        .spacing(SPACING_MD)
        .wrap();

    column![header, cards].spacing(SPACING_LG).into()
}

fn lab_card<'a>(card: LabCard<'a>, colors: ModeColors) -> Element<'a, Message> {
    let item = card.item;

    let mut meta = column![].spacing(2.0);
    if let Some(period) = item.period {
        meta = meta.push(text(format!("Period · {period}")).size(12).style(text_muted));
    }
    meta = meta.push(text(format!("Role · {}", item.role)).size(12).style(text_muted));

    let action: Element<'a, Message> = match card.call_to_action {
        Some((href, label)) => button(
            row![text(label).size(13), lucide::arrow_right().size(13)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .padding([SPACING_XS, SPACING_MD])
        .style(button_accent(colors.accent))
        .on_press(Message::OpenLink(href.to_string()))
        .into(),
        None => text(PENDING_CASE_STUDY).size(12).style(text_muted).into(),
    };

    let footer = row![
        text(card.footer_label).size(11).style(text_muted),
        space::horizontal(),
        action,
    ]
    .align_y(Alignment::Center);

    container(
        column![
            chip(item.badge),
            text(item.title).size(18),
            meta,
            text(item.summary).size(14).style(text_secondary),
            Space::new().height(Length::Fill),
            footer,
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fixed(LAB_CARD_WIDTH))
    .height(Length::Fixed(300.0))
    .padding(SPACING_LG)
    .style(container_card)
    .into()
}
