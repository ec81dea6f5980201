//! Loading spinner component

use dioxus::prelude::*;

/// Small inline spinner shown while a README or demo page is in flight
#[component]
pub fn LoadingSpinner(
    /// Text next to the spinner
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-8", role: "status",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-sky-700" }
            p { class: "ml-3 text-gray-600", "{message}" }
        }
    }
}
