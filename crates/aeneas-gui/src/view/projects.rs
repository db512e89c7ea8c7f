//! Selected Work: one keycap board per project, and the detail panel of the
//! open project underneath.

use aeneas_core::{ProjectTile, ShowcaseView};
use iced::widget::{Column, Row, Space, button, column, container, row, text};
use iced::{Element, Length};

use super::{active_colors, detail};
use crate::component::{keycap_board, spans};
use crate::message::{Message, ShowcaseMessage};
use crate::state::DisplaySettings;
use crate::theme::{
    KEYCAP_GAP, KEYCAP_SIZE, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, accent_color,
    button_card, container_card, text_muted, text_secondary,
};

pub(super) fn view_projects<'a>(
    model: &ShowcaseView<'a>,
    display: &DisplaySettings,
) -> Element<'a, Message> {
    let copy = model.copy;

    let intro = Column::with_children(
        copy.work_intro
            .iter()
            .map(|line| text(*line).size(14).style(text_secondary).into()),
    )
    .spacing(SPACING_XS);

    let header = column![
        text(copy.work_kicker).size(12).style(text_muted),
        spans(copy.work_heading, 28.0, active_colors(model).accent),
        intro,
    ]
    .spacing(SPACING_SM);

    let boards = Row::with_children(model.projects.iter().map(view_tile))
        .spacing(SPACING_LG)
        .wrap();

    let mut content = column![header, boards].spacing(SPACING_LG);
    if let Some(panel) = &model.detail {
        content = content.push(detail::view_detail(panel, display));
    }
    content.into()
}

fn view_tile<'a>(tile: &ProjectTile<'a>) -> Element<'a, Message> {
    let accent = accent_color(tile.accent);
    let cols = tile.board.size().cols as f32;
    let board_width = KEYCAP_SIZE * cols + KEYCAP_GAP * (cols - 1.0).max(0.0);

    let [category, discipline] = tile.caption;
    let caption = container(
        column![
            text(category).size(11).style(text_muted),
            text(discipline).size(13),
        ]
        .spacing(2.0),
    )
    .width(Length::Fill)
    .padding([SPACING_SM, SPACING_MD])
    .style(container_card);

    let percent = tile.variant.card_width_percent();
    let caption_row = row![
        container(caption).width(Length::FillPortion(percent)),
        Space::new().width(Length::FillPortion(100 - percent)),
    ];

    button(
        column![keycap_board(&tile.board, accent), caption_row]
            .spacing(SPACING_MD)
            .width(Length::Fixed(board_width)),
    )
    .padding(SPACING_LG)
    .style(button_card(accent, tile.active))
    .on_press(Message::Showcase(ShowcaseMessage::SelectProject(tile.id)))
    .into()
}
