//! Zoom overlay: one visual, enlarged, over the page.

use aeneas_core::ZoomOverlay;
use iced::widget::{column, image, text};
use iced::{ContentFit, Element, Length};

use crate::component::overlay;
use crate::message::{Message, ShowcaseMessage};
use crate::state::DisplaySettings;
use crate::theme::{SPACING_SM, ZOOM_WIDTH, text_secondary};

pub(super) fn view_zoom<'a>(
    base: Element<'a, Message>,
    zoom: ZoomOverlay<'a>,
    display: &DisplaySettings,
) -> Element<'a, Message> {
    let handle = image::Handle::from_path(display.asset_path(zoom.src));

    let content = column![
        image(handle)
            .width(Length::Fill)
            .content_fit(ContentFit::Contain),
        text(zoom.title).size(18),
        text(zoom.caption).size(14).style(text_secondary),
    ]
    .spacing(SPACING_SM);

    overlay(
        base,
        content.into(),
        ZOOM_WIDTH,
        Message::Showcase(ShowcaseMessage::CloseVisual),
    )
}
