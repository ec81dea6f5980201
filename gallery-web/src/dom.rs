//! Small DOM side effects outside the component tree

const SITE_TITLE: &str = "Gallery";

/// Tab title for the current selection
pub fn page_title(project_title: Option<&str>) -> String {
    match project_title {
        Some(title) => format!("{title} · {SITE_TITLE}"),
        None => SITE_TITLE.to_string(),
    }
}

pub fn set_document_title(project_title: Option<&str>) {
    let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(&page_title(project_title));
}

/// Address of the current page, used to resolve relative fetch paths
pub fn page_url() -> Option<String> {
    web_sys_x::window()?.location().href().ok()
}
