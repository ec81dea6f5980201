//! README display

use dioxus::prelude::*;
use gallery_common::{MarkdownRenderer, RenderedMarkdown};

/// Renders markdown source through `renderer`.
///
/// Converted output is set as inner HTML; plain-text output (conversion
/// disabled) is shown verbatim in a `<pre>`.
#[component]
pub fn MarkdownView(source: String, renderer: MarkdownRenderer) -> Element {
    let rendered = use_memo(use_reactive!(|(source, renderer)| renderer.render(&source)));

    match rendered() {
        RenderedMarkdown::Html(html) => rsx! {
            article {
                class: "prose flex flex-col items-center max-w-3xl",
                dangerous_inner_html: "{html}",
            }
        },
        RenderedMarkdown::Text(text) => rsx! {
            pre { class: "whitespace-pre-wrap font-mono text-sm max-w-3xl", "{text}" }
        },
    }
}
