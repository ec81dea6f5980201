//! Button components

use dioxus::prelude::*;

/// Unstyled `<button type="button">` carrying the accessibility attributes the
/// gallery needs. Navigation entries and tab buttons build on this.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    /// Opaque correlation token, rendered as the button's `value`
    #[props(default)]
    value: Option<String>,
    /// `aria-current` token, e.g. "page" for the selected project
    #[props(default)]
    aria_current: Option<&'static str>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            value: value.as_deref(),
            aria_current,
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled - the active tab
    Primary,
    /// Text only with hover
    Ghost,
}

/// Styled small button
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "bg-sky-800 text-white",
        ButtonVariant::Ghost => "text-gray-700",
    };

    rsx! {
        ChromelessButton {
            aria_pressed: pressed,
            class: Some(
                format!("inline-flex items-center gap-2 rounded-md px-3 py-1.5 text-sm {variant_class}"),
            ),
            onclick,
            {children}
        }
    }
}
