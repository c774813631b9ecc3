//! peek-common - Viewport model shared by the preview UI
//!
//! Pure data structures with no UI or browser dependencies: the device size
//! table, the viewport reducer and the drag-resize state machine.

pub mod config;
pub mod device;
pub mod dimensions;
pub mod drag;
pub mod viewport;

pub use config::PreviewConfig;
pub use device::{Device, Orientation, ParseDeviceError, ParseOrientationError};
pub use dimensions::{Dimensions, WindowSize};
pub use drag::{DragController, DragState, PointerDelta, ResizeAxis};
pub use viewport::{fit_scale, ViewportAction, ViewportState};
