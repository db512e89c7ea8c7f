//! Widget style functions for the studio theme.
//!
//! Plain style functions take `(&Theme, Status)` and can be passed straight
//! to `.style(...)`. Accent-aware styles are built by a function that
//! returns the closure:
//!
//! ```rust,ignore
//! button(text("열어보기")).style(button_accent(accent_color(Accent::Sky)))
//! ```

use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors::{StudioColors, blend_color, with_alpha};
use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Ghost button style - icon buttons, text links.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    let (background, text_color): (Option<Background>, Color) = match status {
        button::Status::Active => (None, studio.text_secondary),
        button::Status::Hovered => (
            Some(with_alpha(palette.primary.base.color, 0.12).into()),
            palette.background.base.text,
        ),
        button::Status::Pressed => (
            Some(with_alpha(palette.primary.base.color, 0.22).into()),
            palette.background.base.text,
        ),
        button::Status::Disabled => (None, studio.text_muted),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Filled button in an accent color - toggles and calls to action.
pub fn button_accent(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let studio = theme.studio();
        let (background, shadow) = match status {
            button::Status::Active => (accent, studio.shadow),
            button::Status::Hovered => (blend_color(accent, Color::WHITE, 0.15), studio.shadow),
            button::Status::Pressed => (blend_color(accent, Color::BLACK, 0.15), Color::TRANSPARENT),
            button::Status::Disabled => (with_alpha(accent, 0.35), Color::TRANSPARENT),
        };

        button::Style {
            background: Some(background.into()),
            text_color: studio.stone,
            border: Border {
                radius: spacing::BORDER_RADIUS_FULL.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: shadow,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 6.0,
            },
            ..Default::default()
        }
    }
}

/// Card-shaped button - constellation cards, project boards, thumbnails.
///
/// Active cards keep an accent border; inactive ones only gain it on hover.
pub fn button_card(
    accent: Color,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let studio = theme.studio();
        let highlighted = active || matches!(status, button::Status::Hovered);

        let background = match status {
            button::Status::Pressed => studio.surface_raised,
            _ if active => blend_color(studio.surface, accent, 0.08),
            _ => studio.surface,
        };

        button::Style {
            background: Some(background.into()),
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                radius: spacing::BORDER_RADIUS_XL.into(),
                width: 1.0,
                color: if highlighted {
                    accent
                } else {
                    studio.border_default
                },
            },
            shadow: Shadow {
                color: if active {
                    with_alpha(accent, 0.35)
                } else {
                    studio.shadow
                },
                offset: Vector::new(0.0, 4.0),
                blur_radius: if active { 24.0 } else { 12.0 },
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Section card surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let studio = theme.studio();
    container::Style {
        background: Some(studio.surface.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: studio.border_default,
        },
        ..Default::default()
    }
}

/// Raised surface - detail panel, zoom dialog.
pub fn container_raised(theme: &Theme) -> container::Style {
    let studio = theme.studio();
    container::Style {
        background: Some(studio.surface_raised.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_XL.into(),
            width: 1.0,
            color: studio.border_default,
        },
        shadow: Shadow {
            color: studio.shadow,
            offset: Vector::new(0.0, 8.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

/// Pill outline used by hero chips and badges.
pub fn container_chip(theme: &Theme) -> container::Style {
    let studio = theme.studio();
    container::Style {
        text_color: Some(studio.text_secondary),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 1.0,
            color: studio.border_default,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Secondary body copy.
pub fn text_secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.studio().text_secondary),
    }
}

/// Kickers, captions and labels.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.studio().text_muted),
    }
}
