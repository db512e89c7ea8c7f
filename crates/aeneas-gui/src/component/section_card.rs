//! Section card component.
//!
//! A kicker line, a title and a body on the card surface.
//!
//! ```rust,ignore
//! SectionCard::new("Studio Status", body)
//!     .kicker("01 · BRAND CORE")
//!     .icon(lucide::sparkles().size(14))
//!     .view()
//! ```

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::theme::{SPACING_LG, SPACING_SM, SPACING_XS, StudioColors, container_card};

// =============================================================================
// SECTION CARD
// =============================================================================

/// A titled section card with optional kicker and icon.
pub struct SectionCard<'a, M> {
    title: String,
    kicker: Option<String>,
    kicker_color: Option<Color>,
    icon: Option<Element<'a, M>>,
    content: Element<'a, M>,
}

impl<'a, M: 'a> SectionCard<'a, M> {
    /// Create a new section card with title and content.
    pub fn new(title: impl Into<String>, content: impl Into<Element<'a, M>>) -> Self {
        Self {
            title: title.into(),
            kicker: None,
            kicker_color: None,
            icon: None,
            content: content.into(),
        }
    }

    /// Small uppercase line above the title.
    pub fn kicker(mut self, kicker: impl Into<String>) -> Self {
        self.kicker = Some(kicker.into());
        self
    }

    /// Color of the kicker line. Muted text when unset.
    pub fn kicker_color(mut self, color: Color) -> Self {
        self.kicker_color = Some(color);
        self
    }

    /// Add an icon before the title.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let Self {
            title,
            kicker,
            kicker_color,
            icon,
            content,
        } = self;

        let title_text = text(title).size(18);
        let header: Element<'a, M> = match icon {
            Some(ic) => row![ic, Space::new().width(SPACING_SM), title_text]
                .align_y(Alignment::Center)
                .into(),
            None => title_text.into(),
        };

        let mut body = column![].spacing(SPACING_SM);
        if let Some(kicker) = kicker {
            body = body.push(text(kicker).size(11).style(move |theme: &Theme| text::Style {
                color: Some(kicker_color.unwrap_or(theme.studio().text_muted)),
            }));
        }
        body = body
            .push(header)
            .push(Space::new().height(SPACING_XS))
            .push(content);

        container(body)
            .width(Length::Fill)
            .padding(SPACING_LG)
            .style(container_card)
            .into()
    }
}
