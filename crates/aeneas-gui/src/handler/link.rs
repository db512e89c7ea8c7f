//! External link handler.
//!
//! Footer links, lab call-to-action buttons and visual captions all emit
//! [`Message::OpenLink`]. Targets are handed to the OS with `open`.

use std::path::PathBuf;

use iced::Task;

use super::MessageHandler;
use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, DisplaySettings};

/// Where a link points once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute URL with a scheme (`https:`, `mailto:`, ...).
    Url(String),
    /// Root-relative asset resolved against the asset directory.
    Path(PathBuf),
    /// Placeholder or in-page anchor. Nothing to open.
    Ignored,
}

/// Resolve an `href` from the catalog into something the OS can open.
pub fn resolve_link(href: &str, display: &DisplaySettings) -> LinkTarget {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        LinkTarget::Ignored
    } else if has_scheme(href) {
        LinkTarget::Url(href.to_string())
    } else {
        LinkTarget::Path(display.asset_path(href))
    }
}

fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    // Single letters are drive prefixes, not schemes
    scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Opens links with the system handler.
pub struct LinkHandler;

impl MessageHandler<String> for LinkHandler {
    fn handle(&self, state: &mut AppState, href: String) -> Task<Message> {
        let result = match resolve_link(&href, &state.settings.display) {
            LinkTarget::Ignored => {
                tracing::debug!(href = %href, "Ignoring placeholder link");
                return Task::none();
            }
            LinkTarget::Url(url) => {
                tracing::info!(url = %url, "Opening link");
                open::that(&url).map_err(|err| GuiError::open_link(url, err))
            }
            LinkTarget::Path(path) => {
                tracing::info!(path = %path.display(), "Opening asset");
                open::that(&path).map_err(|err| GuiError::open_link(path.display().to_string(), err))
            }
        };

        if let Err(err) = result {
            tracing::error!(%err, suggestion = err.suggestion().unwrap_or_default(), "Failed to open link");
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_pass_through() {
        let display = DisplaySettings::default();
        assert_eq!(
            resolve_link("https://instagram.com/aeneas", &display),
            LinkTarget::Url("https://instagram.com/aeneas".to_string())
        );
        assert_eq!(
            resolve_link("mailto:hello@aeneas.kr", &display),
            LinkTarget::Url("mailto:hello@aeneas.kr".to_string())
        );
    }

    #[test]
    fn anchors_are_ignored() {
        let display = DisplaySettings::default();
        assert_eq!(resolve_link("#", &display), LinkTarget::Ignored);
        assert_eq!(resolve_link("  ", &display), LinkTarget::Ignored);
    }

    #[test]
    fn root_relative_paths_use_asset_root() {
        let display = DisplaySettings {
            asset_root: PathBuf::from("/srv/aeneas"),
            ..DisplaySettings::default()
        };
        assert_eq!(
            resolve_link("/lab/global-vcc.pdf", &display),
            LinkTarget::Path(PathBuf::from("/srv/aeneas/lab/global-vcc.pdf"))
        );
    }

    #[test]
    fn drive_letters_are_not_schemes() {
        assert!(!has_scheme("C:/assets/a.pdf"));
        assert!(has_scheme("https://a.b"));
        assert!(!has_scheme("/work/zigzag/1.jpg"));
    }
}
