//! End-to-end navigation through the application update loop.

use aeneas_core::{DetailView, VisualRef};
use aeneas_gui::App;
use aeneas_gui::handler::{LinkTarget, resolve_link, shortcut};
use aeneas_gui::message::{Message, ShowcaseMessage};
use aeneas_gui::state::{AppState, Settings};
use aeneas_model::{ModeId, ProjectId};
use iced::keyboard::{self, key::Named};

fn send(app: &mut App, msg: ShowcaseMessage) {
    let _ = app.update(Message::Showcase(msg));
}

/// Resolve Escape the way the keyboard handler does and apply the result.
fn press_escape(app: &mut App) -> Option<ShowcaseMessage> {
    let msg = shortcut(app.state(), &keyboard::Key::Named(Named::Escape))?;
    send(app, msg);
    Some(msg)
}

#[test]
fn browse_zoom_and_back_out_with_escape() {
    let (mut app, _) = App::new(Settings::default());

    send(&mut app, ShowcaseMessage::SelectMode(ModeId::Visual));
    send(&mut app, ShowcaseMessage::SelectProject(ProjectId::Zigzag));
    send(&mut app, ShowcaseMessage::ToggleDetailView);
    send(
        &mut app,
        ShowcaseMessage::OpenVisual(VisualRef::new(ProjectId::Zigzag, 2)),
    );

    let view = app.state().view_model();
    let zoom = view.zoom.expect("zoom overlay");
    assert!(zoom.src.starts_with("/work/zigzag/"));
    assert_eq!(
        view.detail.as_ref().map(|panel| panel.view),
        Some(DetailView::Visual)
    );

    assert_eq!(press_escape(&mut app), Some(ShowcaseMessage::CloseVisual));
    assert!(app.state().view_model().zoom.is_none());
    assert!(app.state().view_model().detail.is_some());

    assert_eq!(press_escape(&mut app), Some(ShowcaseMessage::CloseProject));
    assert!(app.state().view_model().detail.is_none());

    assert_eq!(press_escape(&mut app), None);
    assert_eq!(app.state().showcase.active_mode(), ModeId::Visual);
}

#[test]
fn switching_projects_resets_the_panel() {
    let (mut app, _) = App::new(Settings::default());

    send(&mut app, ShowcaseMessage::SelectProject(ProjectId::Gmarket));
    send(&mut app, ShowcaseMessage::ToggleDetailView);
    send(
        &mut app,
        ShowcaseMessage::OpenVisual(VisualRef::new(ProjectId::Gmarket, 1)),
    );
    send(&mut app, ShowcaseMessage::SelectProject(ProjectId::Travel));

    let view = app.state().view_model();
    let panel = view.detail.expect("detail panel");
    assert_eq!(panel.detail.id, ProjectId::Travel);
    assert_eq!(panel.view, DetailView::Case);
    assert!(view.zoom.is_none());
}

#[test]
fn every_catalog_link_resolves() {
    let settings = Settings::default();
    let state = AppState::default();
    let model = state.view_model();

    let hrefs = model
        .copy
        .contact_links
        .iter()
        .map(|link| link.href)
        .chain(model.lab.iter().filter_map(|card| card.call_to_action.map(|(href, _)| href)));

    for href in hrefs {
        match resolve_link(href, &settings.display) {
            LinkTarget::Url(url) => assert!(url.contains(':'), "{url}"),
            LinkTarget::Path(path) => assert!(path.starts_with(&settings.display.asset_root)),
            LinkTarget::Ignored => assert!(href.starts_with('#')),
        }
    }
}
