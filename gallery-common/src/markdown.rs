//! README conversion from markdown to display-ready HTML.
//!
//! Raw HTML blocks and inline tags in the source are escaped and shown as
//! text instead of being passed through, and link or image destinations with
//! a scheme other than http, https or mailto are replaced with `#`, so fetched
//! READMEs can't inject markup or script URLs into the page.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];
const NEUTRAL_DESTINATION: &str = "#";

/// Output of [`MarkdownRenderer::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedMarkdown {
    /// Converted HTML fragment, safe to set as inner HTML
    Html(String),
    /// Source text to show verbatim (pre-formatted)
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderMode {
    Html,
    PlainText,
}

/// Markdown to HTML converter that never fails outward.
///
/// A renderer built with conversion disabled stays in plain-text mode for its
/// whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownRenderer {
    mode: RenderMode,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MarkdownRenderer {
    pub fn new(convert: bool) -> Self {
        let mode = if convert {
            RenderMode::Html
        } else {
            tracing::warn!("Markdown conversion disabled, READMEs will be shown as plain text");
            RenderMode::PlainText
        };
        Self { mode }
    }

    pub fn render(&self, source: &str) -> RenderedMarkdown {
        match self.mode {
            RenderMode::Html => RenderedMarkdown::Html(to_html(source)),
            RenderMode::PlainText => RenderedMarkdown::Text(source.to_string()),
        }
    }
}

fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Keep relative destinations and allowed schemes; anything else becomes `#`.
///
/// Browsers ignore whitespace and control characters inside a scheme
/// (`java\tscript:`), so those are stripped before the scheme is read.
fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    let scheme = normalized
        .find(|c: char| matches!(c, ':' | '/' | '?' | '#'))
        .filter(|&end| normalized[end..].starts_with(':'))
        .map(|end| normalized[..end].to_ascii_lowercase());

    match scheme {
        None => dest,
        Some(scheme) if ALLOWED_SCHEMES.contains(&scheme.as_str()) => dest,
        Some(scheme) => {
            tracing::debug!(%scheme, "Neutralising README link destination");
            CowStr::Borrowed(NEUTRAL_DESTINATION)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_emphasis() {
        let rendered = MarkdownRenderer::new(true).render("# Snake\n\nA **tiny** game.");
        let RenderedMarkdown::Html(html) = rendered else {
            panic!("expected HTML");
        };
        assert!(html.contains("<h1>Snake</h1>"));
        assert!(html.contains("<strong>tiny</strong>"));
    }

    #[test]
    fn test_tables_enabled() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let RenderedMarkdown::Html(html) = MarkdownRenderer::default().render(md) else {
            panic!("expected HTML");
        };
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let md = "hello <script>alert(1)</script>\n\n<div onclick=\"x()\">block</div>\n";
        let RenderedMarkdown::Html(html) = MarkdownRenderer::default().render(md) else {
            panic!("expected HTML");
        };
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_script_link_destinations_are_neutralised() {
        let md = "[click](javascript:alert(document.cookie))\n\n\
                  [tab](java%09script:x) [upper](JAVASCRIPT:x) <vbscript:msgbox>\n\n\
                  ![img](data:text/html;base64,PHNjcmlwdD4=)\n";
        let RenderedMarkdown::Html(html) = MarkdownRenderer::default().render(md) else {
            panic!("expected HTML");
        };
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(!html.contains(r#"href="vbscript:"#));
        assert!(!html.contains("data:text/html"));
        assert!(html.contains(r##"<a href="#">click</a>"##));
    }

    #[test]
    fn test_safe_link_destinations_are_kept() {
        let md = "[site](https://example.com/a) [mail](mailto:me@example.com) \
                  [rel](docs/setup.md) [anchor](#usage) [q](page?x=a:b)\n";
        let RenderedMarkdown::Html(html) = MarkdownRenderer::default().render(md) else {
            panic!("expected HTML");
        };
        assert!(html.contains(r#"href="https://example.com/a""#));
        assert!(html.contains(r#"href="mailto:me@example.com""#));
        assert!(html.contains(r#"href="docs/setup.md""#));
        assert!(html.contains(r##"href="#usage""##));
        assert!(html.contains(r#"href="page?x=a:b""#));
    }

    #[test]
    fn test_plain_text_mode_is_verbatim() {
        let renderer = MarkdownRenderer::new(false);
        assert_eq!(
            renderer.render("# not a heading"),
            RenderedMarkdown::Text("# not a heading".to_string())
        );
    }

    #[test]
    fn test_error_text_renders_as_paragraph() {
        let RenderedMarkdown::Html(html) =
            MarkdownRenderer::default().render("HTTP error, status = 404")
        else {
            panic!("expected HTML");
        };
        assert_eq!(html.trim(), "<p>HTTP error, status = 404</p>");
    }
}
