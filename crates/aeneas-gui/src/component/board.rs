//! Keycap board component.
//!
//! Draws a rendered [`Board`] as a grid of keycaps. Glyph cells become dark
//! stones with the letter in the board accent; filler cells stay blank.

use aeneas_core::{Board, Cell};
use iced::widget::{Column, Row, container, text};
use iced::{Border, Color, Element, Length, Shadow, Theme, Vector};

use crate::theme::{BORDER_RADIUS_SM, KEYCAP_GAP, KEYCAP_SIZE, StudioColors, with_alpha};

/// Creates the keycap grid for `board`.
pub fn keycap_board<'a, M: 'a>(board: &Board, accent: Color) -> Element<'a, M> {
    let rows = board.rows().map(|cells| {
        Row::with_children(cells.iter().map(|cell| keycap(*cell, accent)))
            .spacing(KEYCAP_GAP)
            .into()
    });

    Column::with_children(rows).spacing(KEYCAP_GAP).into()
}

fn keycap<'a, M: 'a>(cell: Cell, accent: Color) -> Element<'a, M> {
    let label = cell.glyph.map(String::from).unwrap_or_default();
    let is_stone = cell.is_glyph();

    container(text(label).size(14).color(accent))
        .center_x(Length::Fixed(KEYCAP_SIZE))
        .center_y(Length::Fixed(KEYCAP_SIZE))
        .style(move |theme: &Theme| {
            let studio = theme.studio();
            container::Style {
                background: Some(if is_stone { studio.stone } else { studio.keycap }.into()),
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    width: 1.0,
                    color: if is_stone {
                        with_alpha(accent, 0.45)
                    } else {
                        studio.border_subtle
                    },
                },
                shadow: Shadow {
                    color: studio.shadow,
                    offset: Vector::new(0.0, if is_stone { 2.0 } else { 1.0 }),
                    blur_radius: if is_stone { 4.0 } else { 1.0 },
                },
                ..Default::default()
            }
        })
        .into()
}
