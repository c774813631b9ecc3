/// Tunables for the responsive preview.
///
/// Every number the viewport model uses lives here so the web app can hand a
/// single value down through context.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    /// URL loaded when nothing else was requested, and restored when the URL
    /// bar is submitted empty
    pub default_url: String,
    /// Floor for both simulated dimensions, in logical pixels
    pub min_dimension: f64,
    /// Share of the window width the scaled frame may occupy
    pub width_fit: f64,
    /// Share of the window height the scaled frame may occupy
    pub height_fit: f64,
    /// Windows narrower than this start in compact mode
    pub compact_breakpoint: f64,
    /// Horizontal space kept free around the frame in compact mode
    pub compact_gutter: f64,
    /// Share of the window height used by the frame in compact mode
    pub compact_height_ratio: f64,
    /// Lower bound for the computed scale
    pub min_scale: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            default_url: "https://codesandbox.io/s/new".to_string(),
            min_dimension: 300.0,
            width_fit: 0.9,
            height_fit: 0.8,
            compact_breakpoint: 768.0,
            compact_gutter: 64.0,
            compact_height_ratio: 0.8,
            min_scale: 0.01,
        }
    }
}

impl PreviewConfig {
    /// Whether a window of the given width starts in compact mode.
    pub fn is_compact(&self, window_width: f64) -> bool {
        window_width < self.compact_breakpoint
    }
}
