//! Overlay component.
//!
//! Stacks a dialog over the page with a dimmed backdrop. Unlike a modal
//! confirmation, clicking the backdrop dismisses the overlay.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, space, stack};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{SPACING_LG, SPACING_SM, StudioColors, button_ghost, container_raised};

/// Creates a dismissible overlay.
///
/// # Arguments
///
/// * `base` - The page underneath
/// * `content` - Dialog body
/// * `width` - Dialog width in pixels
/// * `on_dismiss` - Sent by the close button and by backdrop clicks
pub fn overlay<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    content: Element<'a, M>,
    width: f32,
    on_dismiss: M,
) -> Element<'a, M> {
    let backdrop = mouse_area(
        container(column![])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.studio().backdrop.into()),
                ..Default::default()
            }),
    )
    .on_press(on_dismiss.clone());

    let close = button(lucide::x().size(20))
        .on_press(on_dismiss)
        .padding([4.0, 8.0])
        .style(button_ghost);

    let dialog = container(
        column![row![space::horizontal(), close], content].spacing(SPACING_SM),
    )
    .width(Length::Fixed(width))
    .padding(SPACING_LG)
    .style(container_raised);

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(opaque(dialog))].into()
}
