//! egui front end for [`ColorPicker`].
//!
//! Paints the hue strip and hex field inline and the shade square in a popup
//! below them while the picker is open. A press anywhere outside those areas
//! closes the popup.

use egui::{vec2, CursorIcon, Id, Mesh, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use pagecraft_core::picker::{LinearGradient, ShadeSquare, HUE_STRIP_SIZE, SHADE_SQUARE_SIZE};
use pagecraft_core::presets::QUICK_COLORS;
use pagecraft_core::{ColorPicker, EditorConfig};

use crate::colors::{black_with_alpha, hex_to_color32, to_color32, ColorSwatch};
use crate::menu::panel_frame;
use crate::theme;

/// Picker widget around a [`ColorPicker`] owned by the caller.
pub struct ColorPickerWidget<'a> {
    picker: &'a mut ColorPicker,
    id: Id,
    strip_size: Vec2,
    square_size: Vec2,
    quick_colors: Vec<String>,
}

impl<'a> ColorPickerWidget<'a> {
    pub fn new(picker: &'a mut ColorPicker, id_salt: impl std::hash::Hash) -> Self {
        Self {
            picker,
            id: Id::new(("color_picker", id_salt)),
            strip_size: to_vec2(HUE_STRIP_SIZE),
            square_size: to_vec2(SHADE_SQUARE_SIZE),
            quick_colors: QUICK_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Take canvas sizes and quick colors from the editor config.
    pub fn config(mut self, config: &EditorConfig) -> Self {
        self.strip_size = to_vec2(config.hue_strip_size);
        self.square_size = to_vec2(config.shade_square_size);
        self.quick_colors = config.quick_colors.clone();
        self
    }

    /// Show the picker. Returns the color emitted this frame, if any.
    pub fn show(self, ui: &mut Ui) -> Option<String> {
        let Self { picker, id, strip_size, square_size, quick_colors } = self;
        let mut emitted = None;

        let inline = ui.horizontal(|ui| {
            let (strip_rect, strip) = ui.allocate_exact_size(strip_size, Sense::click_and_drag());
            if ui.is_rect_visible(strip_rect) {
                let gradient = picker.hue_strip(strip_size.x as f64);
                ui.painter().add(Shape::mesh(gradient_mesh(strip_rect, &gradient)));
            }
            if let Some(pos) = strip.interact_pointer_pos() {
                let x = (pos.x - strip_rect.left()) as f64;
                if let Some(color) = picker.set_hue_from_pointer(x, strip_rect.width() as f64) {
                    emitted = Some(color);
                }
            }
            strip.on_hover_cursor(CursorIcon::Crosshair);

            let mut text = picker.hex_text().to_string();
            let field = ui.add(egui::TextEdit::singleline(&mut text).desired_width(72.0));
            if field.changed() {
                if let Some(color) = picker.edit_hex_text(&text) {
                    emitted = Some(color);
                }
            }
        });

        let mut popup_rect = None;
        if picker.is_open() {
            let anchor = inline.response.rect;
            let area = egui::Area::new(id.with("popup"))
                .fixed_pos(Pos2::new(anchor.left(), anchor.bottom() + 4.0))
                .order(egui::Order::Foreground)
                .show(ui.ctx(), |ui| {
                    panel_frame().show(ui, |ui| {
                        if let Some(color) = shade_square_ui(ui, picker, square_size) {
                            emitted = Some(color);
                        }
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new("Quick colors").size(10.0).color(theme::TEXT_MUTED),
                        );
                        if let Some(color) = quick_colors_ui(ui, picker, &quick_colors) {
                            emitted = Some(color);
                        }
                    });
                });
            popup_rect = Some(area.response.rect);
        }

        if picker.is_open() && pressed_outside(ui, inline.response.rect, popup_rect) {
            picker.pointer_pressed_outside();
        }

        if let Some(color) = &emitted {
            log::debug!("Color picker emitted {}", color);
        }
        emitted
    }
}

fn shade_square_ui(ui: &mut Ui, picker: &mut ColorPicker, size: Vec2) -> Option<String> {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
    if ui.is_rect_visible(rect) {
        if let Some(square) = picker.shade_square(size.x as f64, size.y as f64) {
            paint_shade_square(ui, rect, &square);
        }
    }
    let emitted = response.interact_pointer_pos().and_then(|pos| {
        let local = pos - rect.min;
        picker.set_shade_from_pointer(
            local.x as f64,
            local.y as f64,
            rect.width() as f64,
            rect.height() as f64,
        )
    });
    response.on_hover_cursor(CursorIcon::Crosshair);
    emitted
}

fn quick_colors_ui(ui: &mut Ui, picker: &mut ColorPicker, colors: &[String]) -> Option<String> {
    let mut emitted = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 4.0);
        for hex in colors {
            let Some(color) = hex_to_color32(hex) else {
                continue;
            };
            let (clicked, _) = ColorSwatch::new(color, hex)
                .selected(picker.color() == hex.as_str())
                .show(ui);
            if clicked {
                match picker.pick_quick_color(hex) {
                    Ok(color) => emitted = Some(color),
                    Err(err) => log::warn!("Quick color rejected: {}", err),
                }
            }
        }
    });
    emitted
}

fn paint_shade_square(ui: &Ui, rect: Rect, square: &ShadeSquare) {
    let painter = ui.painter_at(rect);
    painter.add(Shape::mesh(gradient_mesh(rect, &square.saturation)));
    painter.add(Shape::mesh(gradient_mesh(rect, &square.brightness)));
    for ring in &square.marker {
        let center = rect.min + vec2(ring.center.x as f32, ring.center.y as f32);
        painter.circle_stroke(
            center,
            ring.radius as f32,
            Stroke::new(ring.stroke_width as f32, to_color32(ring.color)),
        );
    }
}

/// Build a mesh filling `rect` with a horizontal or vertical gradient.
fn gradient_mesh(rect: Rect, gradient: &LinearGradient) -> Mesh {
    let horizontal =
        (gradient.end.x - gradient.start.x).abs() >= (gradient.end.y - gradient.start.y).abs();
    let mut mesh = Mesh::default();

    for pair in gradient.stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let color_a = stop_color(a.color, a.alpha);
        let color_b = stop_color(b.color, b.alpha);
        let (t0, t1) = (a.offset as f32, b.offset as f32);

        let base = mesh.vertices.len() as u32;
        if horizontal {
            let x0 = rect.left() + t0 * rect.width();
            let x1 = rect.left() + t1 * rect.width();
            mesh.colored_vertex(Pos2::new(x0, rect.top()), color_a);
            mesh.colored_vertex(Pos2::new(x1, rect.top()), color_b);
            mesh.colored_vertex(Pos2::new(x1, rect.bottom()), color_b);
            mesh.colored_vertex(Pos2::new(x0, rect.bottom()), color_a);
        } else {
            let y0 = rect.top() + t0 * rect.height();
            let y1 = rect.top() + t1 * rect.height();
            mesh.colored_vertex(Pos2::new(rect.left(), y0), color_a);
            mesh.colored_vertex(Pos2::new(rect.right(), y0), color_a);
            mesh.colored_vertex(Pos2::new(rect.right(), y1), color_b);
            mesh.colored_vertex(Pos2::new(rect.left(), y1), color_b);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    mesh
}

fn stop_color(rgb: pagecraft_core::Rgb, alpha: f64) -> egui::Color32 {
    if alpha >= 1.0 {
        to_color32(rgb)
    } else if rgb == pagecraft_core::Rgb::BLACK {
        black_with_alpha(alpha)
    } else {
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        egui::Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha)
    }
}

/// Whether a pointer press this frame landed outside every picker area.
fn pressed_outside(ui: &Ui, inline: Rect, popup: Option<Rect>) -> bool {
    ui.input(|i| {
        if !i.pointer.any_pressed() {
            return false;
        }
        match i.pointer.interact_pos() {
            Some(pos) => !inline.contains(pos) && !popup.is_some_and(|r| r.contains(pos)),
            None => false,
        }
    })
}

fn to_vec2((w, h): (f64, f64)) -> Vec2 {
    vec2(w as f32, h as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::picker::hue_strip;
    use pagecraft_core::Hsv;

    #[test]
    fn test_hue_strip_mesh_has_quad_per_segment() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 24.0));
        let mesh = gradient_mesh(rect, &hue_strip(100.0));
        assert_eq!(mesh.vertices.len(), 12 * 4);
        assert_eq!(mesh.indices.len(), 12 * 6);
        assert_eq!(mesh.vertices[0].pos, Pos2::new(0.0, 0.0));
        assert_eq!(mesh.vertices[3].pos, Pos2::new(0.0, 24.0));
    }

    #[test]
    fn test_brightness_mesh_is_vertical() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(200.0, 150.0));
        let square = pagecraft_core::picker::shade_square(Hsv::new(0.0, 1.0, 1.0), 200.0, 150.0);
        let mesh = gradient_mesh(rect, &square.brightness);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.vertices[0].color, egui::Color32::TRANSPARENT);
        assert_eq!(mesh.vertices[3].color, egui::Color32::BLACK);
        assert_eq!(mesh.vertices[3].pos, Pos2::new(0.0, 150.0));
    }

    #[test]
    fn test_widget_sizes_follow_config() {
        let mut picker = ColorPicker::new("#000000");
        let mut config = EditorConfig::default();
        config.hue_strip_size = (120.0, 20.0);
        let widget = ColorPickerWidget::new(&mut picker, "text").config(&config);
        assert_eq!(widget.strip_size, vec2(120.0, 20.0));
        assert_eq!(widget.quick_colors.len(), 10);
    }
}
