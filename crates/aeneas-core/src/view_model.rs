//! Read-only view model for the presentation layer.
//!
//! [`ShowcaseView::build`] resolves the current [`Showcase`] state against its
//! catalog once per frame, so views never look anything up themselves. The
//! detail panel only exists while a project is open, which means a stale
//! [`DetailView::Visual`] can never be drawn without a project behind it.

use aeneas_model::{
    Accent, BoardVariant, ContentCatalog, LabItem, ModeConfig, ModeId, ProjectDetail, ProjectId,
    ProjectVisual, StudioCopy, TextSpan, ToolInfo, parse_tools,
};

use crate::board::{Board, render_tile_board};
use crate::showcase::{DetailView, Showcase, ShowcaseState, VisualRef};

/// One entry of the mode tab rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTab<'a> {
    pub id: ModeId,
    pub config: &'a ModeConfig,
    pub active: bool,
}

/// One project board in the Selected Work grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTile<'a> {
    pub id: ProjectId,
    pub board: Board,
    pub variant: BoardVariant,
    pub accent: Accent,
    pub caption: [&'a str; 2],
    pub active: bool,
}

/// Label of the case/visual toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLabel {
    pub text: &'static str,
    pub arrow: &'static str,
}

impl ToggleLabel {
    /// The label names the sub-view the button switches *to*.
    pub fn for_view(view: DetailView) -> Self {
        match view {
            DetailView::Case => Self {
                text: "프로젝트 보기",
                arrow: "→",
            },
            DetailView::Visual => Self {
                text: "설명 보기",
                arrow: "←",
            },
        }
    }
}

/// A gallery thumbnail and the reference used to zoom into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem<'a> {
    pub visual: VisualRef,
    pub asset: &'a ProjectVisual,
}

/// The detail panel of the open project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel<'a> {
    pub detail: &'a ProjectDetail,
    pub view: DetailView,
    pub toggle: ToggleLabel,
    pub accent: Accent,
    pub tools: Vec<ToolInfo<'a>>,
    pub context: Vec<TextSpan<'a>>,
    pub gallery: Vec<GalleryItem<'a>>,
}

/// The enlarged image overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomOverlay<'a> {
    pub visual: VisualRef,
    pub src: &'a str,
    pub title: &'a str,
    pub caption: &'a str,
}

/// One Studio Lab card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabCard<'a> {
    pub item: &'a LabItem,
    pub footer_label: &'static str,
    /// Link target and label; `None` renders the pending label.
    pub call_to_action: Option<(&'static str, &'static str)>,
}

/// Everything the page needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseView<'a> {
    pub state: ShowcaseState,
    pub copy: &'a StudioCopy,
    pub modes: Vec<ModeTab<'a>>,
    pub mode: &'a ModeConfig,
    pub projects: Vec<ProjectTile<'a>>,
    pub detail: Option<DetailPanel<'a>>,
    pub zoom: Option<ZoomOverlay<'a>>,
    pub lab: Vec<LabCard<'a>>,
}

impl<'a> ShowcaseView<'a> {
    pub fn build<C: ContentCatalog>(showcase: &'a Showcase<C>) -> Self {
        let catalog = showcase.catalog();
        let state = showcase.state();

        let modes = ModeId::ALL
            .into_iter()
            .map(|id| ModeTab {
                id,
                config: catalog.mode(id),
                active: id == state.active_mode,
            })
            .collect();

        let projects = ProjectId::ALL
            .into_iter()
            .map(|id| {
                let spec = catalog.board(id);
                ProjectTile {
                    id,
                    board: render_tile_board(spec),
                    variant: spec.variant,
                    accent: spec.accent,
                    caption: spec.caption,
                    active: state.active_project == Some(id),
                }
            })
            .collect();

        let detail = state
            .active_project
            .map(|id| detail_panel(catalog, id, state.detail_view));

        let zoom = state.zoomed_visual.and_then(|visual| {
            let asset = catalog.visuals(visual.project).get(visual.index)?;
            Some(ZoomOverlay {
                visual,
                src: asset.src,
                title: asset.title,
                caption: asset.caption,
            })
        });

        let lab = catalog
            .lab_items()
            .iter()
            .map(|item| LabCard {
                item,
                footer_label: item.kind.footer_label(),
                call_to_action: item.call_to_action(),
            })
            .collect();

        Self {
            state,
            copy: catalog.copy(),
            modes,
            mode: catalog.mode(state.active_mode),
            projects,
            detail,
            zoom,
            lab,
        }
    }
}

fn detail_panel<C: ContentCatalog>(
    catalog: &C,
    id: ProjectId,
    view: DetailView,
) -> DetailPanel<'_> {
    let detail = catalog.project(id);
    let gallery = catalog
        .visuals(id)
        .iter()
        .enumerate()
        .map(|(index, asset)| GalleryItem {
            visual: VisualRef::new(id, index),
            asset,
        })
        .collect();

    DetailPanel {
        detail,
        view,
        toggle: ToggleLabel::for_view(view),
        accent: catalog.board(id).accent,
        tools: detail.tools.map(parse_tools).unwrap_or_default(),
        context: detail.context.spans(),
        gallery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeneas_model::StudioCatalog;

    #[test]
    fn closed_showcase_has_no_detail_or_zoom() {
        let showcase = Showcase::new(StudioCatalog);
        let view = ShowcaseView::build(&showcase);
        assert!(view.detail.is_none());
        assert!(view.zoom.is_none());
        assert_eq!(view.projects.len(), 3);
        assert!(view.projects.iter().all(|tile| !tile.active));
    }

    #[test]
    fn exactly_one_mode_tab_is_active() {
        let mut showcase = Showcase::new(StudioCatalog);
        showcase.select_mode(ModeId::Web);
        let view = ShowcaseView::build(&showcase);
        let active: Vec<ModeId> = view
            .modes
            .iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.id)
            .collect();
        assert_eq!(active, vec![ModeId::Web]);
        assert_eq!(view.mode.id, ModeId::Web);
    }

    #[test]
    fn toggle_label_follows_sub_view() {
        let mut showcase = Showcase::new(StudioCatalog);
        showcase.select_project(ProjectId::Gmarket);
        let case = ShowcaseView::build(&showcase).detail.map(|panel| panel.toggle);
        assert_eq!(case, Some(ToggleLabel::for_view(DetailView::Case)));
        assert_eq!(case.map(|label| label.text), Some("프로젝트 보기"));

        showcase.toggle_detail_view();
        let visual = ShowcaseView::build(&showcase).detail.map(|panel| panel.toggle);
        assert_eq!(visual.map(|label| label.arrow), Some("←"));
    }

    #[test]
    fn gallery_references_open_project() {
        let mut showcase = Showcase::new(StudioCatalog);
        showcase.select_project(ProjectId::Travel);
        let view = ShowcaseView::build(&showcase);
        let gallery = view.detail.map(|panel| panel.gallery).unwrap_or_default();
        assert_eq!(gallery.len(), 3);
        assert!(gallery.iter().all(|item| item.visual.project == ProjectId::Travel));
        assert_eq!(gallery[2].visual.index, 2);
    }

    #[test]
    fn zoom_overlay_carries_visual_text() {
        let mut showcase = Showcase::new(StudioCatalog);
        showcase.select_project(ProjectId::Gmarket);
        showcase.open_visual(VisualRef::new(ProjectId::Gmarket, 1));
        let view = ShowcaseView::build(&showcase);
        let zoom = view.zoom.map(|overlay| overlay.title);
        assert_eq!(zoom, Some("기획전 배너 & 캠페인"));
    }

    #[test]
    fn lab_cards_resolve_call_to_action() {
        let showcase = Showcase::new(StudioCatalog);
        let view = ShowcaseView::build(&showcase);
        assert_eq!(view.lab.len(), 3);
        assert!(view.lab.iter().all(|card| card.call_to_action.is_some()));
        assert_eq!(view.lab[0].footer_label, "Client work");
    }
}
