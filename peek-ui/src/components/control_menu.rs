//! Device / orientation controls
//!
//! A toggle button with a panel underneath listing one row per device preset
//! and a rotate action. Selecting a device closes the panel (the viewport
//! model does that as part of the selection); rotating leaves it open.

use crate::components::{
    Button, ButtonVariant, ChromelessButton, DeviceIcon, MenuIcon, RotateIcon, XIcon,
};
use dioxus::prelude::*;
use peek_common::{Device, Dimensions, Orientation};

#[component]
pub fn ControlMenu(
    is_open: bool,
    device: Device,
    orientation: Orientation,
    /// Current simulated size, shown in the readout
    dimensions: Dimensions,
    scale: f64,
    on_toggle: EventHandler<()>,
    on_select_device: EventHandler<Device>,
    on_rotate: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "relative flex items-center gap-3",
            SizeReadout { dimensions, scale }
            Button {
                variant: if is_open { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                aria_label: Some(if is_open { "Close controls" } else { "Open controls" }.to_string()),
                onclick: move |_| on_toggle.call(()),
                if is_open {
                    XIcon {}
                } else {
                    MenuIcon {}
                }
                DeviceIcon { device }
            }

            if is_open {
                div { class: "absolute right-0 top-full mt-2 z-20 min-w-56 bg-gray-800 rounded-lg shadow-lg border border-gray-700 p-1",
                    for option in Device::ALL {
                        DeviceRow {
                            key: "{option}",
                            device: option,
                            orientation,
                            selected: option == device,
                            on_select: on_select_device,
                        }
                    }
                    div { class: "my-1 border-t border-gray-700" }
                    MenuRow { onclick: move |_| on_rotate.call(()),
                        RotateIcon {}
                        span { class: "flex-1", "Rotate" }
                        span { class: "text-xs text-gray-500", "{orientation}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DeviceRow(
    device: Device,
    orientation: Orientation,
    selected: bool,
    on_select: EventHandler<Device>,
) -> Element {
    let size = device.size_in(orientation);

    rsx! {
        MenuRow { selected, onclick: move |_| on_select.call(device),
            DeviceIcon { device }
            span { class: "flex-1", "{device.label()}" }
            span { class: "text-xs text-gray-500 tabular-nums", "{size.width} × {size.height}" }
        }
    }
}

/// Individual menu row
#[component]
fn MenuRow(
    #[props(default)] selected: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base =
        "w-full text-left px-3 py-2 text-sm rounded-md transition-colors flex items-center gap-2";
    let variant = if selected {
        "bg-indigo-600/20 text-white"
    } else {
        "text-gray-300 hover:bg-gray-700 hover:text-white"
    };

    rsx! {
        ChromelessButton {
            class: Some(format!("{base} {variant}")),
            aria_pressed: Some(selected),
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(e);
            },
            {children}
        }
    }
}

/// `width × height` of the simulated viewport and the zoom it's drawn at
#[component]
pub fn SizeReadout(dimensions: Dimensions, scale: f64) -> Element {
    let width = dimensions.width.round();
    let height = dimensions.height.round();
    let percent = (scale * 100.0).round();

    rsx! {
        span { class: "text-sm text-gray-400 font-mono tabular-nums",
            "{width} × {height}"
            span { class: "ml-2 text-gray-500", "{percent}%" }
        }
    }
}
