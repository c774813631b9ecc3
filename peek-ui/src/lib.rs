//! peek-ui - View components for the responsive preview
//!
//! Pure view components driven by the `peek-common` viewport model, plus the
//! browser listener plumbing the drag and window-resize handling needs.

pub mod components;
pub mod wasm_utils;

pub use components::*;
