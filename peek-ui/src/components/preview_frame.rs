//! Embedded page rendered at a simulated viewport size

use dioxus::prelude::*;
use peek_common::Dimensions;

/// Iframe sized to `dimensions` and visually shrunk by `scale`.
///
/// The outer box takes `on_screen` (`dimensions` times `scale`), the inner
/// box keeps the full logical size and is scaled from its top-left corner, so
/// the embedded page always lays out against `dimensions`. `children` are overlaid on the outer
/// box (the resize handles).
#[component]
pub fn PreviewFrame(
    url: String,
    dimensions: Dimensions,
    on_screen: Dimensions,
    scale: f64,
    /// Accessible name of the iframe
    title: String,
    /// Let the iframe receive pointer events. Turned off while dragging so
    /// the embedded page can't swallow mousemove/mouseup.
    #[props(default = true)]
    capture_pointer: bool,
    children: Element,
) -> Element {
    let outer_style = format!(
        "width: {}px; height: {}px;",
        on_screen.width, on_screen.height
    );
    let inner_style = format!(
        "width: {}px; height: {}px; transform: scale({}); transform-origin: top left;",
        dimensions.width, dimensions.height, scale
    );
    let pointer_style = if capture_pointer {
        ""
    } else {
        "pointer-events: none;"
    };

    rsx! {
        div {
            class: "relative flex-shrink-0 rounded-lg bg-white shadow-xl ring-1 ring-gray-700",
            style: "{outer_style}",
            div { class: "absolute inset-0 overflow-hidden rounded-lg",
                div { style: "{inner_style}",
                    iframe {
                        src: "{url}",
                        title,
                        class: "w-full h-full border-0 bg-white",
                        style: "{pointer_style}",
                    }
                }
            }
            {children}
        }
    }
}
