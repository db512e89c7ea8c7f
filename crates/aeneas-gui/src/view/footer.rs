//! Studio Status, contact links and the closing footer.

use aeneas_core::ShowcaseView;
use chrono::Datelike;
use iced::widget::{Row, button, column, row, space, text};
use iced::{Alignment, Element};

use super::active_colors;
use crate::component::{SectionCard, spans};
use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_SM, button_ghost, text_muted};

pub(super) fn view_footer<'a>(model: &ShowcaseView<'a>) -> Element<'a, Message> {
    let copy = model.copy;
    let colors = active_colors(model);

    let links = Row::with_children(copy.contact_links.iter().map(|link| {
        button(text(link.label).size(14))
            .padding([6.0, 12.0])
            .style(button_ghost)
            .on_press(Message::OpenLink(link.href.to_string()))
            .into()
    }))
    .spacing(SPACING_SM);

    let status = SectionCard::new(
        copy.status_label,
        column![spans(copy.status_body, 15.0, colors.accent), links].spacing(SPACING_LG),
    )
    .view();

    let year = chrono::Local::now().year();
    let bottom = row![
        text(copyright_line(year, copy.brand_name)).size(12).style(text_muted),
        space::horizontal(),
        text(copy.footer_note).size(12).style(text_muted),
    ]
    .align_y(Alignment::Center);

    column![status, bottom].spacing(SPACING_LG).into()
}

/// The copyright line shown at the bottom of the page.
pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {year} {brand}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_year_and_brand() {
        assert_eq!(
            copyright_line(2026, "AENEAS Studio"),
            "© 2026 AENEAS Studio. All rights reserved."
        );
    }
}
