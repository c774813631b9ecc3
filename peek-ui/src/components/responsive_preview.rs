//! Responsive preview: control menu, scaled frame and drag handles wired to
//! the viewport model

use crate::components::{ControlMenu, PreviewFrame, ResizeHandle};
use crate::wasm_utils::{pointer_movement, window_size, EventListener};
use dioxus::prelude::*;
use peek_common::{
    Device, DragController, Orientation, PreviewConfig, ResizeAxis, ViewportAction,
    ViewportState,
};
use tracing::{debug, info};

/// Cleanup handle for drag session listeners
struct DragListeners {
    _mousemove: EventListener,
    _mouseup: EventListener,
    _blur: EventListener,
}

/// Renders `url` inside a simulated device viewport.
///
/// Reads [`PreviewConfig`] from context, falling back to the defaults.
#[component]
pub fn ResponsivePreview(
    url: String,
    /// Accessible name of the embedded page
    frame_title: String,
    /// Device to start on instead of the default
    #[props(default)]
    initial_device: Option<Device>,
    /// Orientation to start in instead of portrait
    #[props(default)]
    initial_orientation: Option<Orientation>,
    /// Called after the device or orientation changes
    #[props(default)]
    on_change: Option<EventHandler<(Device, Orientation)>>,
) -> Element {
    let config = try_use_context::<PreviewConfig>().unwrap_or_default();

    let mut viewport = use_signal(move || {
        let window = window_size().unwrap_or_default();
        let mut state = ViewportState::new(window, config);
        if let Some(orientation) = initial_orientation {
            state.set_orientation(orientation);
        }
        if let Some(device) = initial_device {
            state.select_device(device);
        }
        state
    });
    let drag = use_signal(DragController::new);
    let mut resize_listener: Signal<Option<EventListener>> = use_signal(|| None);
    let mut drag_listeners: Signal<Option<DragListeners>> = use_signal(|| None);

    // Window resize refits the frame for as long as the preview is mounted
    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // The first measurement may predate the JS bridge; take a fresh one
        if let Some(size) = window_size() {
            viewport.write().window_resized(size);
        }

        let listener = EventListener::on_window(&window, "resize", move |_| {
            if let Some(size) = window_size() {
                viewport.write().window_resized(size);
            }
        });
        resize_listener.set(Some(listener));
    });

    // Document-level listeners exist only during a drag session. Release is
    // caught anywhere in the document, and losing window focus ends the
    // session too, so a release outside the frame can't leave it stuck.
    use_effect(move || {
        if !drag.read().is_dragging() {
            // Drop listeners to remove them
            drag_listeners.set(None);
            return;
        }

        let Some(window) = web_sys_x::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let mousemove =
            EventListener::on_document(&document, "mousemove", move |e: wasm_bindgen_x::JsValue| {
                let Some(delta) = pointer_movement(&e) else {
                    return;
                };
                let action = drag.peek().pointer_moved(delta);
                if let Some(action) = action {
                    viewport.write().apply(action);
                }
            });

        let mouseup = EventListener::on_document(&document, "mouseup", move |_| {
            end_drag(drag, viewport);
        });

        let blur = EventListener::on_window(&window, "blur", move |_| {
            end_drag(drag, viewport);
        });

        drag_listeners.set(Some(DragListeners {
            _mousemove: mousemove,
            _mouseup: mouseup,
            _blur: blur,
        }));
    });

    let (device, orientation, dimensions, on_screen, scale, menu_open) = {
        let state = viewport.read();
        (
            state.device(),
            state.orientation(),
            state.dimensions(),
            state.scaled_dimensions(),
            state.scale(),
            state.menu_open(),
        )
    };
    let dragging_axis = drag.read().axis();

    rsx! {
        div { class: "flex flex-col items-center gap-4 w-full h-full",
            div { class: "flex w-full justify-end",
                ControlMenu {
                    is_open: menu_open,
                    device,
                    orientation,
                    dimensions,
                    scale,
                    on_toggle: move |_| viewport.write().apply(ViewportAction::ToggleMenu),
                    on_select_device: move |device: Device| {
                        info!("Previewing as {}", device);
                        viewport.write().apply(ViewportAction::SelectDevice(device));
                        notify_change(on_change, viewport);
                    },
                    on_rotate: move |_| {
                        viewport.write().apply(ViewportAction::Rotate);
                        info!("Rotated to {}", viewport.peek().orientation());
                        notify_change(on_change, viewport);
                    },
                }
            }

            div {
                class: format!(
                    "flex-1 w-full flex justify-center pb-8 {}",
                    if dragging_axis.is_some() { "select-none" } else { "" },
                ),
                PreviewFrame {
                    url,
                    dimensions,
                    on_screen,
                    scale,
                    title: frame_title,
                    capture_pointer: dragging_axis.is_none(),
                    ResizeHandle {
                        axis: ResizeAxis::Horizontal,
                        is_active: dragging_axis == Some(ResizeAxis::Horizontal),
                        on_press: move |axis: ResizeAxis| start_drag(drag, axis),
                    }
                    ResizeHandle {
                        axis: ResizeAxis::Vertical,
                        is_active: dragging_axis == Some(ResizeAxis::Vertical),
                        on_press: move |axis: ResizeAxis| start_drag(drag, axis),
                    }
                }
            }
        }
    }
}

fn start_drag(mut drag: Signal<DragController>, axis: ResizeAxis) {
    debug!("Drag resize started on {:?} axis", axis);
    drag.write().press(axis);
}

fn end_drag(mut drag: Signal<DragController>, viewport: Signal<ViewportState>) {
    // Listeners can fire after the session already ended; don't write the
    // signal again in that case
    if !drag.peek().is_dragging() {
        return;
    }
    if let Some(axis) = drag.write().release() {
        let dims = viewport.peek().dimensions();
        debug!(
            "Drag resize on {:?} axis ended at {}x{}",
            axis, dims.width, dims.height
        );
    }
}

fn notify_change(
    on_change: Option<EventHandler<(Device, Orientation)>>,
    viewport: Signal<ViewportState>,
) {
    if let Some(handler) = on_change {
        let state = viewport.peek();
        handler.call((state.device(), state.orientation()));
    }
}
