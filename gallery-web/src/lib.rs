//! gallery-web - Browser entry point for the portfolio gallery
//!
//! Owns the project registry, the detail state and every network fetch;
//! the views in `gallery-ui` only receive plain values.

pub mod api;
pub mod config;
pub mod dom;
pub mod pages;

use dioxus::prelude::*;
use pages::GalleryRoot;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GalleryRoot {}
    }
}
