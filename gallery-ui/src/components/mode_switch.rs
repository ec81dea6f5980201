//! README / Demo switch, a two-segment control over [`DisplayMode`]

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::{FileTextIcon, PlayIcon};
use dioxus::prelude::*;
use gallery_common::DisplayMode;

const SEGMENTS: [(DisplayMode, &str); 2] = [
    (DisplayMode::Readme, "Readme"),
    (DisplayMode::Demo, "Demo"),
];

/// A pair of toggle buttons where exactly one mode is selected
#[component]
pub fn ModeSwitch(selected: DisplayMode, on_select: EventHandler<DisplayMode>) -> Element {
    rsx! {
        div { class: "flex gap-1 rounded-lg bg-gray-100 p-1", role: "group",
            for (mode , label) in SEGMENTS {
                Button {
                    key: "{label}",
                    variant: if mode == selected { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    pressed: Some(mode == selected),
                    onclick: move |_| on_select.call(mode),
                    if mode == DisplayMode::Readme {
                        FileTextIcon {}
                    } else {
                        PlayIcon {}
                    }
                    "{label}"
                }
            }
        }
    }
}
