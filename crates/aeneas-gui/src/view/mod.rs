//! View layer for AENEAS Studio.
//!
//! Views are pure functions of the derived [`ShowcaseView`]: they never look
//! anything up in the catalog and never mutate state. The page is one
//! scrollable column, with the zoom overlay stacked on top when a visual is
//! open.

mod detail;
mod footer;
mod hero;
mod lab;
mod modes;
mod projects;
mod zoom;

use aeneas_core::ShowcaseView;
use aeneas_model::Accent;
use iced::widget::{column, container, scrollable};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{CONTENT_MAX_WIDTH, ModeColors, SPACING_XL, SPACING_XXL, accent_color};

pub use footer::copyright_line;

/// Render the whole showcase page.
pub fn view_showcase(state: &AppState) -> Element<'_, Message> {
    let model = state.view_model();
    let display = &state.settings.display;

    let page = column![
        hero::view_hero(&model),
        modes::view_modes(&model),
        projects::view_projects(&model, display),
        lab::view_lab(&model),
        footer::view_footer(&model),
    ]
    .spacing(SPACING_XXL)
    .padding(SPACING_XL)
    .max_width(CONTENT_MAX_WIDTH);

    let base: Element<'_, Message> = scrollable(container(page).center_x(Length::Fill))
        .height(Length::Fill)
        .into();

    match model.zoom {
        Some(zoom) => zoom::view_zoom(base, zoom, display),
        None => base,
    }
}

/// Colors of the active mode, used to tint page-level emphasis.
fn active_colors(model: &ShowcaseView<'_>) -> ModeColors {
    ModeColors::resolve(&model.mode.colors, accent_color(Accent::Emerald))
}
