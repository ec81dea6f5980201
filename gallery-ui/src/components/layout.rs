//! Gallery layout view component

use dioxus::prelude::*;

/// Navigation column on the left, detail pane filling the rest
#[component]
pub fn GalleryLayoutView(
    /// Project navigation
    nav: Element,
    /// Detail pane
    children: Element,
) -> Element {
    rsx! {
        div { class: "h-screen flex",
            aside { class: "w-56 flex-shrink-0 overflow-y-auto bg-sky-900", {nav} }
            main { class: "flex-1 min-w-0 overflow-y-auto", {children} }
        }
    }
}
