//! WASM utilities for browser interop
//!
//! # Listener lifetime
//!
//! A JavaScript listener backed by a Rust `Closure` has to keep the closure
//! alive for as long as it is attached. `Closure::forget()` does that by
//! leaking it, which also leaves the listener attached forever.
//!
//! [`EventListener`] owns the closure instead and detaches it in `Drop`, so the
//! listener lives exactly as long as the Rust value:
//!
//! ```ignore
//! let listener = EventListener::on_window(&window, "resize", callback);
//!
//! // Detached here
//! drop(listener);
//! ```
//!
//! With Dioxus, keep listeners in a `Signal<Option<_>>` owned by the
//! component. Setting it to `None` detaches them, and so does unmounting the
//! component, since the signal's value is dropped with its scope.

use peek_common::{PointerDelta, WindowSize};
use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach {} listener", event_name);
        }

        Self {
            target,
            event_name,
            callback,
        }
    }

    pub fn on_document(
        document: &web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        Self::new(document.clone().into(), event_name, callback)
    }

    pub fn on_window(
        window: &web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        Self::new(window.clone().into(), event_name, callback)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Inner size of the browser window, if there is one to measure.
pub fn window_size() -> Option<WindowSize> {
    let window = web_sys_x::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(WindowSize::new(width, height))
}

/// Reads `movementX` / `movementY` off a raw mouse event.
pub fn pointer_movement(event: &wasm_bindgen_x::JsValue) -> Option<PointerDelta> {
    let read = |key: &str| {
        js_sys_x::Reflect::get(event, &key.into())
            .ok()
            .and_then(|value| value.as_f64())
    };
    Some(PointerDelta::new(read("movementX")?, read("movementY")?))
}
