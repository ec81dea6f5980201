//! Demo views: inline page injection and cross-origin frame

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Load state of an inline demo page
#[derive(Clone, Debug, PartialEq)]
pub enum InlineDemoState {
    Loading,
    /// Fetched page markup
    Ready(String),
    /// Failure message, shown as a short paragraph
    Failed(String),
}

/// Injects a fetched same-origin demo page. Each new state replaces the
/// previous content entirely.
#[component]
pub fn InlineDemoView(state: InlineDemoState) -> Element {
    match state {
        InlineDemoState::Loading => rsx! {
            LoadingSpinner { message: "Loading demo..." }
        },
        InlineDemoState::Ready(html) => rsx! {
            div { class: "w-full h-full", dangerous_inner_html: "{html}" }
        },
        InlineDemoState::Failed(message) => rsx! {
            div { class: "flex items-center gap-2 text-amber-700",
                AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
                p { "{message}" }
            }
        },
    }
}

/// Points an isolated frame at an externally hosted demo. Load failures stay
/// inside the frame.
#[component]
pub fn FrameDemoView(src: String, #[props(default)] title: Option<String>) -> Element {
    rsx! {
        iframe {
            class: "w-full h-full min-h-[70vh] border-0",
            src: "{src}",
            title: title.as_deref().unwrap_or("Project demo"),
        }
    }
}
