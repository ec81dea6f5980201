use crate::api;
use dioxus::prelude::*;
use gallery_common::FetchError;
use gallery_ui::{InlineDemoState, InlineDemoView};

/// Inline demo: fetches the project's page and injects it.
///
/// Changing `path` restarts the fetch and replaces whatever was shown; a
/// superseded request is dropped with its task.
#[component]
pub fn InlineDemo(path: String) -> Element {
    let page = use_resource(use_reactive!(|(path,)| async move {
        api::fetch_text(&path).await
    }));

    let state = demo_state(page.read().as_ref());

    rsx! {
        InlineDemoView { state }
    }
}

/// Map the fetch resource onto what the view shows; `None` means still pending.
fn demo_state(result: Option<&Result<String, FetchError>>) -> InlineDemoState {
    match result {
        None => InlineDemoState::Loading,
        Some(Ok(html)) => InlineDemoState::Ready(html.clone()),
        Some(Err(e)) => InlineDemoState::Failed(e.to_string()),
    }
}
