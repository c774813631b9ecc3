use crate::link_state::LinkState;
use crate::url_bar::resolve_submission;
use crate::Route;
use dioxus::prelude::*;
use peek_common::{Device, Orientation, PreviewConfig};
use peek_ui::{ResponsivePreview, TextInput};
use tracing::info;

#[component]
pub fn Preview(state: Option<String>) -> Element {
    let config = use_context::<PreviewConfig>();
    let link = use_hook(|| LinkState::decode(state.as_deref().unwrap_or_default()));

    let initial_url = link
        .url
        .clone()
        .unwrap_or_else(|| config.default_url.clone());
    let mut draft = use_signal(|| initial_url.clone());
    let mut frame_url = use_signal(|| initial_url);
    let shared = use_signal(|| link.clone());

    let default_url = config.default_url.clone();
    let on_submit = move |_: ()| {
        let url = resolve_submission(&draft.peek(), &default_url);
        if *draft.peek() != url {
            draft.set(url.clone());
        }
        info!("Loading {}", url);
        frame_url.set(url.clone());
        publish(shared, |link| link.url = Some(url));
    };

    rsx! {
        div { class: "h-screen w-full bg-gray-900 text-white flex flex-col p-4 gap-4",
            div { class: "flex-none flex flex-col items-center gap-4",
                h1 { class: "text-2xl font-bold text-center", "Sandbox" }
                div { class: "w-full max-w-2xl",
                    TextInput {
                        value: draft(),
                        on_input: move |value: String| draft.set(value),
                        on_submit,
                        placeholder: "Enter a URL and press Enter",
                        aria_label: "Preview URL",
                        monospace: true,
                    }
                }
            }
            div { class: "flex-1 min-h-0",
                ResponsivePreview {
                    url: frame_url(),
                    frame_title: "CodeSandbox".to_string(),
                    initial_device: link.device,
                    initial_orientation: link.orientation,
                    on_change: move |(device, orientation): (Device, Orientation)| {
                        publish(
                            shared,
                            |link| {
                                link.device = Some(device);
                                link.orientation = Some(orientation);
                            },
                        );
                    },
                }
            }
        }
    }
}

/// Apply `update` to the shared link state and mirror it into the address bar
/// without adding a history entry.
fn publish(mut shared: Signal<LinkState>, update: impl FnOnce(&mut LinkState)) {
    update(&mut *shared.write());
    navigator().replace(Route::Preview {
        state: shared.peek().encode(),
    });
}
