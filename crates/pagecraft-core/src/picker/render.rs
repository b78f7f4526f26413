//! Paint instructions for the hue strip and the shade square.
//!
//! These describe what to draw independent of any drawing API; the host maps
//! them onto its own gradient and stroke primitives.

use crate::color::{Hsv, Rgb};
use kurbo::Point;

/// Hue spacing between hue strip stops, in degrees.
pub const HUE_STOP_STEP: u32 = 30;

/// Radius of the light outer ring of the shade marker.
pub const MARKER_OUTER_RADIUS: f64 = 6.0;
/// Radius of the dark inner ring of the shade marker.
pub const MARKER_INNER_RADIUS: f64 = 5.0;

/// A color stop along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub offset: f64,
    pub color: Rgb,
    /// Opacity, `0.0..=1.0`.
    pub alpha: f64,
}

impl GradientStop {
    pub fn opaque(offset: f64, color: Rgb) -> Self {
        Self { offset, color, alpha: 1.0 }
    }
}

/// A linear gradient between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Gradient along the x axis of a `width`-wide area.
    pub fn horizontal(width: f64, stops: Vec<GradientStop>) -> Self {
        Self { start: Point::ORIGIN, end: Point::new(width, 0.0), stops }
    }

    /// Gradient along the y axis of a `height`-tall area.
    pub fn vertical(height: f64, stops: Vec<GradientStop>) -> Self {
        Self { start: Point::ORIGIN, end: Point::new(0.0, height), stops }
    }
}

/// A stroked circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Rgb,
}

/// Everything needed to paint the shade square, bottom layer first.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeSquare {
    /// White to the fully saturated hue, left to right.
    pub saturation: LinearGradient,
    /// Transparent to opaque black, top to bottom; layered over `saturation`.
    pub brightness: LinearGradient,
    /// Light outer ring then dark inner ring around the current color.
    pub marker: [Ring; 2],
}

/// Hue strip gradient covering the full hue circle.
pub fn hue_strip(width: f64) -> LinearGradient {
    let stops = (0..=360)
        .step_by(HUE_STOP_STEP as usize)
        .map(|deg| {
            let hue = deg as f64;
            GradientStop::opaque(hue / 360.0, Hsv::pure_hue(hue).to_rgb())
        })
        .collect();
    LinearGradient::horizontal(width, stops)
}

/// Shade square for `hsv` on a `width` x `height` canvas.
pub fn shade_square(hsv: Hsv, width: f64, height: f64) -> ShadeSquare {
    let saturation = LinearGradient::horizontal(
        width,
        vec![
            GradientStop::opaque(0.0, Rgb::WHITE),
            GradientStop::opaque(1.0, Hsv::pure_hue(hsv.h).to_rgb()),
        ],
    );
    let brightness = LinearGradient::vertical(
        height,
        vec![
            GradientStop { offset: 0.0, color: Rgb::BLACK, alpha: 0.0 },
            GradientStop { offset: 1.0, color: Rgb::BLACK, alpha: 1.0 },
        ],
    );

    let center = marker_position(hsv, width, height);
    let marker = [
        Ring { center, radius: MARKER_OUTER_RADIUS, stroke_width: 2.0, color: Rgb::WHITE },
        Ring { center, radius: MARKER_INNER_RADIUS, stroke_width: 1.0, color: Rgb::BLACK },
    ];

    ShadeSquare { saturation, brightness, marker }
}

/// Marker center for `hsv`: saturation along x, value inverted along y.
pub fn marker_position(hsv: Hsv, width: f64, height: f64) -> Point {
    Point::new(hsv.s * width, (1.0 - hsv.v) * height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_strip_covers_circle() {
        let strip = hue_strip(100.0);
        assert_eq!(strip.stops.len(), 13);
        assert_eq!(strip.stops.first().map(|s| s.offset), Some(0.0));
        assert_eq!(strip.stops.last().map(|s| s.offset), Some(1.0));
        assert_eq!(strip.stops[0].color, Rgb::new(255, 0, 0));
        assert_eq!(strip.stops[4].color, Rgb::new(0, 255, 0));
        assert_eq!(strip.stops[8].color, Rgb::new(0, 0, 255));
        assert_eq!(strip.stops[12].color, Rgb::new(255, 0, 0));
        assert_eq!(strip.end, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_shade_square_layers() {
        let square = shade_square(Hsv::new(120.0, 0.25, 0.75), 200.0, 150.0);
        assert_eq!(square.saturation.stops[0].color, Rgb::WHITE);
        assert_eq!(square.saturation.stops[1].color, Rgb::new(0, 255, 0));
        assert_eq!(square.brightness.stops[0].alpha, 0.0);
        assert_eq!(square.brightness.stops[1].alpha, 1.0);
        assert_eq!(square.brightness.end, Point::new(0.0, 150.0));
    }

    #[test]
    fn test_marker_rings() {
        let square = shade_square(Hsv::new(0.0, 0.5, 1.0), 200.0, 150.0);
        let [outer, inner] = square.marker;
        assert_eq!(outer.center, Point::new(100.0, 0.0));
        assert_eq!(inner.center, outer.center);
        assert!(outer.radius > inner.radius);
        assert_eq!(outer.color, Rgb::WHITE);
        assert_eq!(inner.color, Rgb::BLACK);
    }
}
