use crate::pages::ProjectPane;
use crate::{api, config, dom};
use dioxus::prelude::*;
use gallery_common::{MarkdownRenderer, ProjectDescriptor, ProjectDetail, ReadmeRequest, SiteConfig};
use gallery_ui::{GalleryLayoutView, ProjectNavView};
use std::rc::Rc;

/// Run a selection cycle: synchronous rebuild, then the README fetch.
///
/// The fetch result is tagged with the selection's ticket, so a response
/// arriving after the user moved on is discarded by `apply_readme`.
pub fn select_project(
    mut detail: Signal<ProjectDetail>,
    site: &SiteConfig,
    project: Option<ProjectDescriptor>,
) {
    let request = detail.write().select(project, site);
    dom::set_document_title(detail.peek().project().map(|p| p.title()));

    let Some(ReadmeRequest { ticket, url }) = request else {
        return;
    };
    spawn(async move {
        let result = api::fetch_text(&url).await;
        detail.write().apply_readme(ticket, result);
    });
}

/// Composition root: one navigation list wired to one detail pane
#[component]
pub fn GalleryRoot() -> Element {
    let gallery = use_hook(|| Rc::new(config::load_gallery()));
    let renderer = use_hook(|| MarkdownRenderer::new(gallery.site.render_markdown));
    let detail = use_context_provider(|| Signal::new(ProjectDetail::new()));

    // Startup selection; reads nothing reactive, so it runs once
    use_effect({
        let gallery = Rc::clone(&gallery);
        move || select_project(detail, &gallery.site, gallery.registry.first().cloned())
    });

    let current = detail
        .read()
        .project()
        .map(|p| p.identifier().to_string());

    rsx! {
        GalleryLayoutView {
            nav: rsx! {
                ProjectNavView {
                    projects: gallery.registry.shared(),
                    current,
                    on_select: {
                        let gallery = Rc::clone(&gallery);
                        move |project: ProjectDescriptor| {
                            select_project(detail, &gallery.site, Some(project))
                        }
                    },
                }
            },
            ProjectPane { renderer }
        }
    }
}
