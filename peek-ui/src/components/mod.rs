//! Shared UI components

pub mod button;
pub mod control_menu;
pub mod icons;
pub mod preview_frame;
pub mod resize_handle;
pub mod responsive_preview;
pub mod text_input;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use control_menu::{ControlMenu, SizeReadout};
pub use icons::{
    DeviceIcon, LaptopIcon, MenuIcon, MonitorIcon, RotateIcon, SmartphoneIcon, TabletIcon, XIcon,
};
pub use preview_frame::PreviewFrame;
pub use resize_handle::ResizeHandle;
pub use responsive_preview::ResponsivePreview;
pub use text_input::TextInput;
