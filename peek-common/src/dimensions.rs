/// Size of the simulated viewport in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width and height exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Raise each side to at least `floor`. NaN sides become `floor`.
    pub fn at_least(self, floor: f64) -> Self {
        Self {
            width: self.width.max(floor),
            height: self.height.max(floor),
        }
    }

    /// On-screen size once the visual scale is applied.
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

/// Inner size of the browser window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    /// Used when the window cannot be measured (no browser, or the JS bridge
    /// isn't ready yet).
    pub const FALLBACK: WindowSize = WindowSize::new(1280.0, 800.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides finite and strictly positive.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped() {
        assert_eq!(
            Dimensions::new(375.0, 667.0).swapped(),
            Dimensions::new(667.0, 375.0)
        );
    }

    #[test]
    fn test_at_least_raises_each_side() {
        let dims = Dimensions::new(120.0, 900.0).at_least(300.0);
        assert_eq!(dims, Dimensions::new(300.0, 900.0));
    }

    #[test]
    fn test_at_least_replaces_nan() {
        let dims = Dimensions::new(f64::NAN, 400.0).at_least(300.0);
        assert_eq!(dims, Dimensions::new(300.0, 400.0));
    }

    #[test]
    fn test_scaled() {
        let dims = Dimensions::new(1920.0, 1080.0).scaled(0.5);
        assert_eq!(dims, Dimensions::new(960.0, 540.0));
    }

    #[test]
    fn test_window_measurable() {
        assert!(WindowSize::new(800.0, 600.0).is_measurable());
        assert!(!WindowSize::new(0.0, 600.0).is_measurable());
        assert!(!WindowSize::new(800.0, f64::INFINITY).is_measurable());
    }
}
