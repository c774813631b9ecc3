//! Drag handles on the preview frame edges

use dioxus::prelude::*;
use peek_common::ResizeAxis;

/// A grab bar that starts a drag-resize on mouse down.
///
/// `Horizontal` sits on the right edge (col-resize), `Vertical` on the bottom
/// edge (row-resize). Movement and release are tracked at document level by
/// the owner, not here.
#[component]
pub fn ResizeHandle(
    axis: ResizeAxis,
    /// Whether this handle's drag is in progress
    is_active: bool,
    on_press: EventHandler<ResizeAxis>,
) -> Element {
    let is_horizontal = axis == ResizeAxis::Horizontal;

    let placement = if is_horizontal {
        "absolute top-1/2 -right-4 -translate-y-1/2 w-4 h-16"
    } else {
        "absolute left-1/2 -bottom-4 -translate-x-1/2 h-4 w-16"
    };

    rsx! {
        div {
            class: format!("{placement} group flex items-center justify-center z-10"),
            style: if is_horizontal { "cursor: col-resize;" } else { "cursor: row-resize;" },
            role: "separator",
            aria_orientation: if is_horizontal { "vertical" } else { "horizontal" },
            aria_label: if is_horizontal { "Resize width" } else { "Resize height" },
            onmousedown: move |e: MouseEvent| {
                e.prevent_default();
                on_press.call(axis);
            },
            div {
                class: format!(
                    "rounded-full transition-colors {} {}",
                    if is_horizontal { "w-1 h-full" } else { "h-1 w-full" },
                    if is_active { "bg-indigo-400" } else { "bg-gray-500 group-hover:bg-gray-300" },
                ),
            }
        }
    }
}
