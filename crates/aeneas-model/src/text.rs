//! Emphasised text spans.
//!
//! Case-study copy marks a few phrases for emphasis. The catalog stores those
//! either as pre-split spans or as a plain string plus a list of key phrases;
//! [`highlight`] turns the latter into spans.

/// A run of text, optionally emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'a> {
    pub text: &'a str,
    pub emphasis: bool,
}

impl<'a> TextSpan<'a> {
    /// An unemphasised span.
    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasis: false,
        }
    }

    /// An emphasised span.
    pub const fn emphasised(text: &'a str) -> Self {
        Self {
            text,
            emphasis: true,
        }
    }
}

/// Split `text` into spans, emphasising every occurrence of each key.
///
/// Keys are applied in order. A key only splits spans that are still plain,
/// so text already emphasised by an earlier key is never cut again. Empty
/// fragments are dropped. The returned spans borrow from `text`.
///
/// # Examples
///
/// ```
/// use aeneas_model::{TextSpan, highlight};
///
/// let spans = highlight("a KEY b", &["KEY"]);
/// assert_eq!(
///     spans,
///     vec![
///         TextSpan::plain("a "),
///         TextSpan::emphasised("KEY"),
///         TextSpan::plain(" b"),
///     ]
/// );
/// ```
pub fn highlight<'a>(text: &'a str, keys: &[&str]) -> Vec<TextSpan<'a>> {
    let mut spans = vec![TextSpan::plain(text)];

    for key in keys.iter().filter(|key| !key.is_empty()) {
        let mut next = Vec::with_capacity(spans.len());

        for span in spans {
            if span.emphasis {
                next.push(span);
                continue;
            }

            let mut rest = span.text;
            while let Some(pos) = rest.find(key) {
                let (before, after) = rest.split_at(pos);
                if !before.is_empty() {
                    next.push(TextSpan::plain(before));
                }
                let (hit, tail) = after.split_at(key.len());
                next.push(TextSpan::emphasised(hit));
                rest = tail;
            }
            if !rest.is_empty() {
                next.push(TextSpan::plain(rest));
            }
        }

        spans = next;
    }

    spans
}
