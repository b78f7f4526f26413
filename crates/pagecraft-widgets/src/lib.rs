//! Reusable egui widgets for the Pagecraft editor.
//!
//! - **Picker**: hue strip, shade square popup and hex field driving a
//!   [`pagecraft_core::ColorPicker`]
//! - **Buttons**: toggle buttons and the bold/italic/underline toolbar
//! - **Colors**: color swatches and conversions from core colors
//! - **Menu**: panel frames for popups

pub mod buttons;
pub mod colors;
pub mod menu;
pub mod picker;

pub use buttons::{format_toggles, ToggleButton};
pub use colors::{hex_to_color32, to_color32, ColorSwatch};
pub use menu::panel_frame;
pub use picker::ColorPickerWidget;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small swatch size
    pub const SMALL: f32 = 20.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
