//! Project detail pane view

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::ExternalLinkIcon;
use crate::components::markdown_view::MarkdownView;
use crate::components::mode_switch::ModeSwitch;
use dioxus::prelude::*;
use gallery_common::{DisplayMode, MarkdownRenderer, ProjectDetail, ReadmeState};

/// Title, repo link, README/Demo switch and the content area for the
/// selected project.
///
/// `demo` is the mounted demo view; the parent builds it from
/// [`ProjectDetail::demo`] and keys it by the selection so every rebuild
/// replaces it wholesale. Regions are hidden with `hidden` rather than
/// unmounted, so switching modes never refetches anything.
#[component]
pub fn ProjectDetailView(
    detail: ProjectDetail,
    renderer: MarkdownRenderer,
    /// Mounted demo, if the selection has one
    #[props(default)]
    demo: Option<Element>,
    on_mode_select: EventHandler<DisplayMode>,
) -> Element {
    let readme = match detail.readme() {
        ReadmeState::Idle => rsx! {},
        ReadmeState::Loading => rsx! {
            LoadingSpinner { message: "Loading README..." }
        },
        ReadmeState::Loaded(text) => rsx! {
            MarkdownView { source: text.clone(), renderer }
        },
    };

    rsx! {
        section { class: "flex flex-col items-center gap-5 w-full h-full p-4",
            h1 { class: "m-0 text-2xl font-semibold", "{detail.title()}" }

            nav {
                class: "flex justify-center items-center gap-2",
                hidden: !detail.controls_visible(),
                a {
                    class: "inline-flex items-center gap-1 px-2 py-1 border border-black rounded-md bg-gray-200 text-black no-underline",
                    href: "{detail.repo_url()}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    ExternalLinkIcon {}
                    "Github"
                }
                ModeSwitch { selected: detail.mode(), on_select: on_mode_select }
            }

            div {
                class: "flex justify-center w-full h-full",
                hidden: !detail.content_visible(),
                div { class: "w-full flex justify-center", hidden: !detail.readme_visible(), {readme} }
                div { class: "w-full h-full", hidden: !detail.demo_visible(),
                    if let Some(demo) = demo {
                        {demo}
                    }
                }
            }
        }
    }
}
