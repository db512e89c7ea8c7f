//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - card padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, section separations
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing - between page sections
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - keycaps, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - buttons
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - cards, panels
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Extra large radius - boards, overlays
pub const BORDER_RADIUS_XL: f32 = 12.0;

/// Full/pill radius - tags, badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Maximum width of the page content column
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

/// Edge length of one keycap on a project board
pub const KEYCAP_SIZE: f32 = 30.0;

/// Gap between keycaps on a project board
pub const KEYCAP_GAP: f32 = 4.0;

/// Height of a gallery thumbnail
pub const THUMBNAIL_HEIGHT: f32 = 140.0;

/// Width of the zoom overlay dialog
pub const ZOOM_WIDTH: f32 = 880.0;

/// Width of one Studio Lab card
pub const LAB_CARD_WIDTH: f32 = 340.0;

/// Padding for tab rail buttons (horizontal)
pub const TAB_PADDING_X: f32 = 16.0;

/// Padding for tab rail buttons (vertical)
pub const TAB_PADDING_Y: f32 = 10.0;
