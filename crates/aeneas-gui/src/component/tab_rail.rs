//! Tab rail component.
//!
//! Horizontal pill tabs. The active tab is filled with its own color, so
//! each mode can carry its tab background token.

use iced::widget::{button, container, row, text};
use iced::{Border, Color, Element, Theme};

use crate::theme::{
    BORDER_RADIUS_FULL, SPACING_XS, StudioColors, TAB_PADDING_X, TAB_PADDING_Y, with_alpha,
};

// =============================================================================
// TAB DEFINITION
// =============================================================================

/// A tab item for the tab rail.
pub struct Tab<M> {
    /// Tab label text
    pub label: String,
    /// Fill color while active
    pub color: Color,
    /// Whether this tab is the selected one
    pub active: bool,
    /// Message to send when tab is clicked
    pub message: M,
}

impl<M> Tab<M> {
    /// Create a new tab.
    pub fn new(label: impl Into<String>, color: Color, active: bool, message: M) -> Self {
        Self {
            label: label.into(),
            color,
            active,
            message,
        }
    }
}

// =============================================================================
// TAB RAIL COMPONENT
// =============================================================================

/// Creates a horizontal tab rail.
pub fn tab_rail<'a, M: Clone + 'a>(tabs: Vec<Tab<M>>) -> Element<'a, M> {
    let mut tab_row = row![].spacing(SPACING_XS);

    for tab in tabs {
        let Tab {
            label,
            color,
            active,
            message,
        } = tab;

        let tab_button = button(text(label).size(12))
            .padding([TAB_PADDING_Y, TAB_PADDING_X])
            .on_press(message)
            .style(move |theme: &Theme, status| {
                let studio = theme.studio();
                let background = if active {
                    Some(color.into())
                } else {
                    match status {
                        button::Status::Hovered => Some(with_alpha(color, 0.2).into()),
                        _ => None,
                    }
                };
                button::Style {
                    background,
                    text_color: if active {
                        theme.extended_palette().background.base.text
                    } else {
                        studio.text_muted
                    },
                    border: Border {
                        radius: BORDER_RADIUS_FULL.into(),
                        width: 0.0,
                        color: Color::TRANSPARENT,
                    },
                    ..Default::default()
                }
            });

        tab_row = tab_row.push(tab_button);
    }

    container(tab_row)
        .padding(SPACING_XS)
        .style(|theme: &Theme| {
            let studio = theme.studio();
            container::Style {
                background: Some(studio.surface.into()),
                border: Border {
                    color: studio.border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_FULL.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
