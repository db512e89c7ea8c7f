//! Theme module for AENEAS Studio.
//!
//! - Studio palette and theme creation (`palette`)
//! - App-specific color extension trait (`colors`)
//! - Catalog color token parsing (`tokens`)
//! - Spacing constants (`spacing`)
//! - Widget styles (`style`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;
pub mod tokens;

pub use colors::{StudioColorSet, StudioColors, blend_color, with_alpha};
pub use palette::{THEME_NAME, studio_palette, studio_theme};
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_RADIUS_XL,
    CONTENT_MAX_WIDTH, KEYCAP_GAP, KEYCAP_SIZE, LAB_CARD_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XS, SPACING_XXL, TAB_PADDING_X, TAB_PADDING_Y, THUMBNAIL_HEIGHT, ZOOM_WIDTH,
};
pub use style::{
    button_accent, button_card, button_ghost, container_card, container_chip, container_raised,
    text_muted, text_secondary,
};
pub use tokens::{ModeColors, accent_color, parse_color};
