//! Toggle buttons and the text formatting toolbar.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Sense, Ui};
use pagecraft_core::DocumentStore;

use crate::{sizing, theme};

/// A toggle button with text label.
/// Uses solid blue background when selected.
pub struct ToggleButton<'a> {
    label: &'a str,
    tooltip: Option<&'a str>,
    selected: bool,
    min_width: Option<f32>,
    height: f32,
    font_size: f32,
}

impl<'a> ToggleButton<'a> {
    /// Create a new toggle button.
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            tooltip: None,
            selected,
            min_width: None,
            height: 24.0,
            font_size: 11.0,
        }
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let text_width = galley.size().x;
        let width = self.min_width.unwrap_or(0.0).max(text_width + 16.0);
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(245)
            };
            let text_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(80)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, text_color);
        }

        let clicked = response.clicked();
        let response = match self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip),
            None => response,
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Bold / italic / underline toggles bound to the store's active style.
///
/// Returns true if any flag changed.
pub fn format_toggles(ui: &mut Ui, store: &mut DocumentStore) -> bool {
    let flags = store.active_style().text_style;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = vec2(2.0, 0.0);
        if ToggleButton::new("B", flags.is_bold).min_width(24.0).tooltip("Bold").show(ui) {
            store.toggle_bold();
            changed = true;
        }
        if ToggleButton::new("I", flags.is_italic).min_width(24.0).tooltip("Italic").show(ui) {
            store.toggle_italic();
            changed = true;
        }
        if ToggleButton::new("U", flags.is_underline)
            .min_width(24.0)
            .tooltip("Underline")
            .show(ui)
        {
            store.toggle_underline();
            changed = true;
        }
    });
    if changed {
        log::debug!("Format flags now {:?}", store.active_style().text_style);
    }
    changed
}
