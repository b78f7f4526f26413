//! Color swatches and conversions between core colors and egui colors.

use egui::{vec2, Color32, CursorIcon, Rect, Sense, Stroke, Ui, Vec2};
use pagecraft_core::Rgb;

use crate::sizing;

/// A clickable circular color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            ui.painter().circle_filled(center, radius, self.color);
            // Light swatches vanish on a light panel without an outline.
            ui.painter()
                .circle_stroke(center, radius, Stroke::new(1.0, Color32::from_gray(200)));

            if self.selected {
                ui.painter().circle_stroke(
                    center,
                    radius - 3.0,
                    Stroke::new(2.0, Color32::from_gray(30)),
                );
            }
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Convert a core color to an opaque egui color.
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Black with the given opacity in `0.0..=1.0`.
pub fn black_with_alpha(alpha: f64) -> Color32 {
    Color32::from_black_alpha((alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Parse a hex color string to an egui color.
pub fn hex_to_color32(hex: &str) -> Option<Color32> {
    Rgb::from_hex(hex).ok().map(to_color32)
}
