//! Constellation cards and the mode panel.

use aeneas_core::{ModeTab, ShowcaseView};
use aeneas_model::Accent;
use iced::widget::{Column, Row, Space, button, column, container, row, space, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};

use super::active_colors;
use crate::component::{SectionCard, Tab, chip, tab_rail};
use crate::message::{Message, ShowcaseMessage};
use crate::theme::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, ModeColors, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, StudioColors, accent_color, button_card, container_card, text_muted,
    text_secondary,
};

pub(super) fn view_modes<'a>(model: &ShowcaseView<'a>) -> Element<'a, Message> {
    column![view_constellation(model), view_panel(model)]
        .spacing(SPACING_LG)
        .into()
}

// =============================================================================
// CONSTELLATION
// =============================================================================

fn view_constellation<'a>(model: &ShowcaseView<'a>) -> Element<'a, Message> {
    let copy = model.copy;

    let header = row![
        column![
            text(copy.constellation_title).size(13),
            text(copy.constellation_subtitle).size(14).style(text_secondary),
        ]
        .spacing(SPACING_XS),
        space::horizontal(),
        chip(copy.constellation_badge),
    ]
    .align_y(Alignment::Center);

    let cards = Row::with_children(model.modes.iter().map(constellation_card)).spacing(SPACING_MD);

    column![header, cards].spacing(SPACING_MD).into()
}

fn constellation_card<'a>(tab: &ModeTab<'a>) -> Element<'a, Message> {
    let card = &tab.config.card;
    let colors = tab_colors(tab);

    button(
        column![
            text(card.kicker).size(11).color(colors.accent),
            text(card.title).size(18),
            text(card.tagline).size(13).style(text_secondary),
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fill)
    .padding(SPACING_LG)
    .style(button_card(colors.core, tab.active))
    .on_press(Message::Showcase(ShowcaseMessage::SelectMode(tab.id)))
    .into()
}

// =============================================================================
// PANEL
// =============================================================================

fn view_panel<'a>(model: &ShowcaseView<'a>) -> Element<'a, Message> {
    let mode = model.mode;
    let colors = active_colors(model);

    let tabs = model
        .modes
        .iter()
        .map(|tab| {
            Tab::new(
                tab.config.tab_label,
                tab_colors(tab).tab_background,
                tab.active,
                Message::from(ShowcaseMessage::SelectMode(tab.id)),
            )
        })
        .collect();

    let active_chip = container(
        row![status_dot(colors), text(mode.chip_label).size(15)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(container_card);

    let target = container(text(mode.title_in_target).size(11))
        .center_x(Length::FillPortion(1))
        .center_y(Length::Fixed(260.0))
        .style(move |theme: &Theme| {
            let studio = theme.studio();
            container::Style {
                background: Some(studio.stone.into()),
                border: Border {
                    radius: BORDER_RADIUS_LG.into(),
                    width: 1.0,
                    color: studio.border_default,
                },
                shadow: Shadow {
                    color: colors.core,
                    offset: Vector::ZERO,
                    blur_radius: 36.0,
                },
                ..Default::default()
            }
        });

    let bullets = Column::with_children(mode.bullets.iter().map(|item| {
        row![text("·").color(colors.accent), text(*item).size(14).style(text_secondary)]
            .spacing(SPACING_SM)
            .into()
    }))
    .spacing(SPACING_XS);

    let footer = row![
        text("Focus · ").size(13).style(text_muted),
        text(mode.focus).size(13),
        space::horizontal(),
        status_dot(colors),
        text(mode.status_label).size(13),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    let copy = column![
        text(mode.section_label).size(11).style(text_muted),
        text(mode.heading).size(24),
        text(mode.body).size(16).style(text_secondary),
        bullets,
        Space::new().height(SPACING_SM),
        footer,
    ]
    .spacing(SPACING_MD)
    .width(Length::FillPortion(2));

    let route = row![
        column![
            text("ROUTE").size(11).style(text_muted),
            text(mode.route_label).size(14),
        ]
        .spacing(SPACING_XS),
        space::horizontal(),
        text(mode.status_label).size(11).color(colors.accent),
    ]
    .align_y(Alignment::End);

    let content = column![
        tab_rail(tabs),
        active_chip,
        row![target, copy].spacing(SPACING_LG),
        route,
    ]
    .spacing(SPACING_LG);

    SectionCard::new(model.copy.panel_title, content)
        .kicker(mode.section_label)
        .kicker_color(colors.accent)
        .view()
}

fn status_dot<'a>(colors: ModeColors) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(10.0))
        .height(Length::Fixed(10.0))
        .style(move |_theme: &Theme| container::Style {
            background: Some(colors.accent.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn tab_colors(tab: &ModeTab<'_>) -> ModeColors {
    ModeColors::resolve(&tab.config.colors, accent_color(Accent::Emerald))
}
