//! Device presets and orientation

use std::fmt;
use std::str::FromStr;

use crate::Dimensions;

/// A named viewport preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Mobile,
    Tablet,
    Laptop,
    Desktop,
}

impl Device {
    /// Every preset, smallest first.
    pub const ALL: [Device; 4] = [
        Device::Mobile,
        Device::Tablet,
        Device::Laptop,
        Device::Desktop,
    ];

    /// Base (portrait) size of the preset.
    pub const fn base_size(self) -> Dimensions {
        match self {
            Device::Mobile => Dimensions::new(375.0, 667.0),
            Device::Tablet => Dimensions::new(768.0, 1024.0),
            Device::Laptop => Dimensions::new(1440.0, 900.0),
            Device::Desktop => Dimensions::new(1920.0, 1080.0),
        }
    }

    /// Size of the preset held in the given orientation.
    pub const fn size_in(self, orientation: Orientation) -> Dimensions {
        let base = self.base_size();
        match orientation {
            Orientation::Portrait => base,
            Orientation::Landscape => base.swapped(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
            Device::Laptop => "laptop",
            Device::Desktop => "desktop",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Device::Mobile => "Mobile",
            Device::Tablet => "Tablet",
            Device::Laptop => "Laptop",
            Device::Desktop => "Desktop",
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for Device {
    fn default() -> Self {
        Device::Desktop
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device: {0:?}")]
pub struct ParseDeviceError(pub String);

impl FromStr for Device {
    type Err = ParseDeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::ALL
            .into_iter()
            .find(|device| device.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDeviceError(s.to_string()))
    }
}

/// Portrait keeps the preset's base axes, landscape swaps them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub const fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for Orientation {
    fn default() -> Self {
        Orientation::Portrait
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation: {0:?}")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}
