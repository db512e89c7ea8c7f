//! Emphasised text.

use aeneas_model::TextSpan;
use iced::font::Weight;
use iced::widget::{rich_text, span, text};
use iced::{Color, Element, Font};

/// Render spans as one paragraph, drawing emphasised runs bold in `accent`.
pub fn spans<'a, M: Clone + 'static>(
    parts: &[TextSpan<'a>],
    size: f32,
    accent: Color,
) -> Element<'a, M> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    let fragments: Vec<text::Span<'a, M>> = parts
        .iter()
        .map(|part| {
            if part.emphasis {
                span(part.text).font(bold).color(accent)
            } else {
                span(part.text)
            }
        })
        .collect();

    rich_text(fragments).size(size).into()
}
