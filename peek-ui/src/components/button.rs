//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for menu rows.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|pressed| if pressed { "true" } else { "false" }),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Gray background - for secondary actions
    Secondary,
    /// No background - text only with hover
    Ghost,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center gap-2 text-sm rounded-lg transition-colors px-3 py-1.5";

    let variant_class = match variant {
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
        ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
    };

    rsx! {
        ChromelessButton {
            class: Some(format!("{base} {variant_class}")),
            aria_label,
            onclick,
            {children}
        }
    }
}
