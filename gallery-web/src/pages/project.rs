use crate::pages::InlineDemo;
use dioxus::prelude::*;
use gallery_common::{DemoMount, DisplayMode, MarkdownRenderer, ProjectDetail};
use gallery_ui::{FrameDemoView, ProjectDetailView};

/// Detail pane bound to the shared [`ProjectDetail`] signal
#[component]
pub fn ProjectPane(renderer: MarkdownRenderer) -> Element {
    let mut detail: Signal<ProjectDetail> = use_context();
    let snapshot = detail.read().clone();

    // Keyed by selection so each rebuild mounts a fresh demo
    let generation = snapshot.generation();
    let demo = snapshot.demo().cloned().map(|mount| match mount {
        DemoMount::Inline { path, .. } => rsx! {
            InlineDemo { key: "{generation}", path }
        },
        DemoMount::Frame { project_id, src } => rsx! {
            FrameDemoView { key: "{generation}", src, title: Some(format!("{project_id} demo")) }
        },
    });

    rsx! {
        ProjectDetailView {
            detail: snapshot,
            renderer,
            demo,
            on_mode_select: move |mode: DisplayMode| detail.write().set_mode(mode),
        }
    }
}
