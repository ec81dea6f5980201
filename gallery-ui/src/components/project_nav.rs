//! Project navigation list

use crate::components::button::ChromelessButton;
use dioxus::prelude::*;
use gallery_common::{resolve_activation, ProjectDescriptor};
use std::rc::Rc;

const ENTRY_CLASS: &str = "w-full text-left px-3 py-2";

/// One button per project, in registry order.
///
/// Each button carries its index as `value`; activation resolves that token
/// back through `projects` and emits the descriptor. Tokens that no longer
/// resolve are dropped without emitting anything. Listeners belong to the
/// rendered buttons and go away with them.
#[component]
pub fn ProjectNavView(
    projects: Rc<[ProjectDescriptor]>,
    /// Identifier of the selected project, marked `aria-current="page"`
    #[props(default)]
    current: Option<String>,
    on_select: EventHandler<ProjectDescriptor>,
) -> Element {
    let entries = projects.iter().enumerate().map(|(index, project)| {
        let projects = Rc::clone(&projects);
        let token = index.to_string();
        let is_current = current.as_deref() == Some(project.identifier());

        rsx! {
            li { key: "{project.identifier()}",
                ChromelessButton {
                    value: Some(token.clone()),
                    aria_current: if is_current { Some("page") } else { None },
                    class: Some(ENTRY_CLASS.to_string()),
                    onclick: move |_| match resolve_activation(&projects, &token) {
                        Some(project) => on_select.call(project.clone()),
                        None => tracing::debug!(%token, "Stale navigation token, ignoring"),
                    },
                    "{project.title()}"
                }
            }
        }
    });

    rsx! {
        nav { aria_label: "Projects",
            ul { class: "flex flex-col gap-2 m-0 p-0 list-none bg-sky-900 text-white",
                {entries}
            }
        }
    }
}
