//! Viewport model: current device, orientation, simulated size and scale
//!
//! All mutation goes through [`ViewportState::apply`] (or the named methods it
//! dispatches to), so every change re-establishes the invariants:
//! both dimensions at or above `PreviewConfig::min_dimension`, and the scale
//! within `[PreviewConfig::min_scale, 1]`.

use crate::{Device, Dimensions, Orientation, PreviewConfig, ResizeAxis, WindowSize};

/// Scale that fits `dimensions` into the usable share of `window`.
///
/// Never upscales past 1. A window that can't be measured yields 1.
pub fn fit_scale(dimensions: Dimensions, window: WindowSize, config: &PreviewConfig) -> f64 {
    if !window.is_measurable() {
        return 1.0;
    }

    let by_width = config.width_fit * window.width / dimensions.width;
    let by_height = config.height_fit * window.height / dimensions.height;

    // f64::min skips NaN operands, so degenerate ratios fall back to 1
    1.0_f64
        .min(by_width)
        .min(by_height)
        .max(config.min_scale)
        .min(1.0)
}

/// Intents the viewport reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportAction {
    /// Switch preset; closes the control menu
    SelectDevice(Device),
    SetOrientation(Orientation),
    /// Flip between portrait and landscape
    Rotate,
    WindowResized(WindowSize),
    /// Grow or shrink one side by an on-screen pointer movement
    ResizeBy {
        axis: ResizeAxis,
        screen_delta: f64,
    },
    ToggleMenu,
    CloseMenu,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    config: PreviewConfig,
    device: Device,
    orientation: Orientation,
    dimensions: Dimensions,
    window: WindowSize,
    scale: f64,
    menu_open: bool,
}

impl ViewportState {
    /// Initial state for a freshly mounted preview.
    ///
    /// Starts on the default device in portrait. Narrow windows start in
    /// compact mode instead: the frame takes the window width minus the
    /// gutter and a share of its height.
    pub fn new(window: WindowSize, config: PreviewConfig) -> Self {
        let device = Device::default();
        let orientation = Orientation::default();

        let dimensions = if window.is_measurable() && config.is_compact(window.width) {
            Dimensions::new(
                window.width - config.compact_gutter,
                window.height * config.compact_height_ratio,
            )
        } else {
            device.size_in(orientation)
        }
        .at_least(config.min_dimension);

        let scale = fit_scale(dimensions, window, &config);

        Self {
            config,
            device,
            orientation,
            dimensions,
            window,
            scale,
            menu_open: false,
        }
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Simulated size as seen by the embedded page
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Size the frame occupies on screen
    pub fn scaled_dimensions(&self) -> Dimensions {
        self.dimensions.scaled(self.scale)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn apply(&mut self, action: ViewportAction) {
        match action {
            ViewportAction::SelectDevice(device) => self.select_device(device),
            ViewportAction::SetOrientation(orientation) => self.set_orientation(orientation),
            ViewportAction::Rotate => self.rotate(),
            ViewportAction::WindowResized(window) => self.window_resized(window),
            ViewportAction::ResizeBy { axis, screen_delta } => self.resize_by(axis, screen_delta),
            ViewportAction::ToggleMenu => self.menu_open = !self.menu_open,
            ViewportAction::CloseMenu => self.menu_open = false,
        }
    }

    /// Switch to `device` at its preset size. Any manual resize is dropped.
    pub fn select_device(&mut self, device: Device) {
        self.device = device;
        self.menu_open = false;
        self.reset_dimensions();
    }

    /// Hold the current device in `orientation`, back at its preset size.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.reset_dimensions();
    }

    pub fn rotate(&mut self) {
        self.set_orientation(self.orientation.toggled());
    }

    /// Refit to a new window. Dimensions are left alone.
    pub fn window_resized(&mut self, window: WindowSize) {
        self.window = window;
        self.recompute_scale();
    }

    /// Apply a pointer movement of `screen_delta` on-screen pixels to one side.
    ///
    /// The frame is drawn at `scale`, so one screen pixel is `1 / scale`
    /// logical pixels.
    pub fn resize_by(&mut self, axis: ResizeAxis, screen_delta: f64) {
        if !screen_delta.is_finite() {
            return;
        }

        let logical_delta = screen_delta / self.scale;
        let floor = self.config.min_dimension;
        match axis {
            ResizeAxis::Horizontal => {
                self.dimensions.width = (self.dimensions.width + logical_delta).max(floor);
            }
            ResizeAxis::Vertical => {
                self.dimensions.height = (self.dimensions.height + logical_delta).max(floor);
            }
        }
        self.recompute_scale();
    }

    fn reset_dimensions(&mut self) {
        self.dimensions = self
            .device
            .size_in(self.orientation)
            .at_least(self.config.min_dimension);
        self.recompute_scale();
    }

    fn recompute_scale(&mut self) {
        self.scale = fit_scale(self.dimensions, self.window, &self.config);
    }
}
