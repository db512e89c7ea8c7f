//! Detail panel of the open project.
//!
//! The case sub-view lays out the narrative record; the visual sub-view is a
//! thumbnail gallery whose items open the zoom overlay.

use aeneas_core::{DetailPanel, DetailView, GalleryItem};
use aeneas_model::ProjectDetail;
use iced::widget::{Column, Row, Space, button, column, container, image, row, space, text};
use iced::{Alignment, Color, ContentFit, Element, Length};
use iced_fonts::lucide;

use crate::component::{spans, tool_badge};
use crate::message::{Message, ShowcaseMessage};
use crate::state::DisplaySettings;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, THUMBNAIL_HEIGHT, accent_color,
    button_accent, button_card, button_ghost, container_raised, text_muted, text_secondary,
};

/// Number of thumbnails per gallery row.
const GALLERY_COLUMNS: usize = 3;

pub(super) fn view_detail<'a>(
    panel: &DetailPanel<'a>,
    display: &DisplaySettings,
) -> Element<'a, Message> {
    let detail = panel.detail;
    let accent = accent_color(panel.accent);

    let meta: Vec<String> = [
        detail.period.map(|period| format!("Period · {period}")),
        detail.client_type.map(|client| format!("Client · {client}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let toggle = button(
        row![text(panel.toggle.text).size(13), text(panel.toggle.arrow).size(13)]
            .spacing(SPACING_XS),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(button_accent(accent))
    .on_press(Message::Showcase(ShowcaseMessage::ToggleDetailView));

    let close = button(lucide::x().size(18))
        .padding([4.0, 8.0])
        .style(button_ghost)
        .on_press(Message::Showcase(ShowcaseMessage::CloseProject));

    let header = row![
        column![
            text(detail.kicker).size(11).color(accent),
            text(detail.title).size(26),
            text(meta.join("   ")).size(13).style(text_muted),
        ]
        .spacing(SPACING_XS),
        space::horizontal(),
        toggle,
        close,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Start);

    let body = match panel.view {
        DetailView::Case => view_case(panel, accent),
        DetailView::Visual => view_gallery(&panel.gallery, display),
    };

    container(column![header, body].spacing(SPACING_LG))
        .width(Length::Fill)
        .padding(SPACING_XL)
        .style(container_raised)
        .into()
}

// =============================================================================
// CASE
// =============================================================================

fn view_case<'a>(panel: &DetailPanel<'a>, accent: Color) -> Element<'a, Message> {
    let detail = panel.detail;

    let tools = Row::with_children(panel.tools.iter().copied().map(tool_badge))
        .spacing(SPACING_XS)
        .wrap();

    let goals = Column::with_children(detail.goals.iter().enumerate().map(|(index, goal)| {
        row![
            text(format!("{:02}", index + 1)).size(12).color(accent),
            text(*goal).size(14).style(text_secondary),
        ]
        .spacing(SPACING_SM)
        .into()
    }))
    .spacing(SPACING_XS);

    let process = Column::with_children(detail.process.iter().map(|step| {
        column![
            text(step.label).size(13).color(accent),
            text(step.body).size(14).style(text_secondary),
        ]
        .spacing(2.0)
        .into()
    }))
    .spacing(SPACING_SM);

    let mut content = column![
        text(format!("Role · {}", detail.role)).size(13).style(text_muted),
        tools,
        section("Context & Problem", spans(&panel.context, 15.0, accent)),
        section("Goals", goals.into()),
        section("Process", process.into()),
        section(
            "Outcome",
            text(detail.outcome).size(15).style(text_secondary).into()
        ),
    ]
    .spacing(SPACING_LG);

    if let Some(links) = view_links(detail) {
        content = content.push(links);
    }
    content.into()
}

fn section<'a>(label: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(12).style(text_muted), body]
        .spacing(SPACING_SM)
        .into()
}

fn view_links<'a>(detail: &'a ProjectDetail) -> Option<Element<'a, Message>> {
    if detail.links.is_empty() {
        return None;
    }
    let links = Row::with_children(detail.links.iter().map(|link| {
        button(
            row![text(link.label).size(13), lucide::link().size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .padding([SPACING_XS, SPACING_SM])
        .style(button_ghost)
        .on_press(Message::OpenLink(link.href.to_string()))
        .into()
    }))
    .spacing(SPACING_SM);
    Some(links.into())
}

// =============================================================================
// GALLERY
// =============================================================================

fn view_gallery<'a>(
    gallery: &[GalleryItem<'a>],
    display: &DisplaySettings,
) -> Element<'a, Message> {
    let rows = gallery.chunks(GALLERY_COLUMNS).map(|chunk| {
        let mut cells: Vec<Element<'a, Message>> = chunk
            .iter()
            .map(|item| thumbnail(*item, display))
            .collect();
        // Pad short rows so thumbnails keep the same width
        cells.resize_with(GALLERY_COLUMNS, || {
            Space::new().width(Length::FillPortion(1)).into()
        });
        Row::with_children(cells).spacing(SPACING_MD).into()
    });

    Column::with_children(rows).spacing(SPACING_MD).into()
}

fn thumbnail<'a>(item: GalleryItem<'a>, display: &DisplaySettings) -> Element<'a, Message> {
    let handle = image::Handle::from_path(display.asset_path(item.asset.src));

    button(
        column![
            image(handle)
                .width(Length::Fill)
                .height(Length::Fixed(THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover),
            text(item.asset.title).size(13),
            text(item.asset.caption).size(12).style(text_muted),
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::FillPortion(1))
    .padding(SPACING_SM)
    .style(button_card(Color::WHITE, false))
    .on_press(Message::Showcase(ShowcaseMessage::OpenVisual(item.visual)))
    .into()
}
