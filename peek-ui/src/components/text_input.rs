//! Reusable text input component

use dioxus::prelude::*;

/// Text input that reports edits and Enter presses separately
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    /// Called when Enter is pressed
    #[props(default)]
    on_submit: Option<EventHandler<()>>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] monospace: bool,
    #[props(default)] aria_label: Option<&'static str>,
) -> Element {
    let base = "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 placeholder-gray-500";
    let font_class = if monospace { "font-mono" } else { "" };
    let class = format!("{base} {font_class}");

    rsx! {
        input {
            r#type: "text",
            class: "{class}",
            value: "{value}",
            placeholder,
            aria_label,
            spellcheck: "false",
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    if let Some(handler) = &on_submit {
                        handler.call(());
                    }
                }
            },
        }
    }
}
