//! Color space conversion between HSV, RGB and hex strings.
//!
//! Hex strings produced here are always lowercase `#rrggbb`. Parsing accepts
//! the short `rgb` and long `rrggbb` forms, with or without a leading `#`.

use crate::error::{EditorError, EditorResult};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    pub fn from_hex(hex: &str) -> EditorResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(EditorError::InvalidColor(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| EditorError::InvalidColor(hex.to_string()))
        };

        match digits.len() {
            3 => {
                // Short form: each digit is doubled ("f" -> "ff").
                let expand = |i: usize| -> EditorResult<u8> {
                    let d = channel(&digits[i..i + 1])?;
                    Ok(d * 17)
                };
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(EditorError::InvalidColor(hex.to_string())),
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSV.
    pub fn to_hsv(self) -> Hsv {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        // Hue is undefined for greys and saturation for black; both canonicalize to 0.
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Hsv {
            h: wrap_hue(h),
            s,
            v: max,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Rgb::new(rgba.r, rgba.g, rgba.b)
    }
}

/// A color in hue/saturation/value form.
///
/// `h` is in degrees `[0, 360)`, `s` and `v` are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create an HSV color, wrapping the hue and clamping s and v.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
        }
    }

    /// The fully saturated, full-brightness color at the given hue.
    pub fn pure_hue(h: f64) -> Self {
        Self::new(h, 1.0, 1.0)
    }

    /// Convert to RGB using the sector formula, rounding each channel.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = Hsv::new(self.h, self.s, self.v);

        let c = v * s;
        let sector = h / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_channel = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(to_channel(r), to_channel(g), to_channel(b))
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Convert HSV components to a `#rrggbb` string.
pub fn hsv_to_hex(h: f64, s: f64, v: f64) -> String {
    Hsv::new(h, s, v).to_hex()
}

/// Parse a hex color into HSV.
pub fn hex_to_hsv(hex: &str) -> EditorResult<Hsv> {
    Rgb::from_hex(hex).map(Rgb::to_hsv)
}

/// Normalize any accepted hex form to lowercase `#rrggbb`.
pub fn normalize_hex(hex: &str) -> EditorResult<String> {
    Rgb::from_hex(hex).map(Rgb::to_hex)
}

/// Check for a complete long-form hex color (6 digits, optional `#`).
pub fn is_full_hex(text: &str) -> bool {
    let digits = text.strip_prefix('#').unwrap_or(text);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Wrap a hue into `[0, 360)`. NaN becomes 0.
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp into `[0, 1]`. NaN becomes 0.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(hsv_to_hex(0.0, 1.0, 1.0), "#ff0000");
        assert_eq!(hsv_to_hex(120.0, 1.0, 1.0), "#00ff00");
        assert_eq!(hsv_to_hex(240.0, 1.0, 1.0), "#0000ff");
        assert_eq!(hsv_to_hex(60.0, 1.0, 1.0), "#ffff00");
        assert_eq!(hsv_to_hex(300.0, 1.0, 1.0), "#ff00ff");
    }

    #[test]
    fn test_rounding_to_nearest_channel() {
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(hsv_to_hex(0.0, 0.0, 0.5), "#808080");
        assert_eq!(hsv_to_hex(30.0, 1.0, 1.0), "#ff8000");
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsv_to_hex(360.0, 1.0, 1.0), "#ff0000");
        assert_eq!(hsv_to_hex(-120.0, 1.0, 1.0), "#0000ff");
    }

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!(normalize_hex("#FFF").unwrap(), "#ffffff");
        assert_eq!(normalize_hex("abc").unwrap(), "#aabbcc");
        assert_eq!(normalize_hex("112233").unwrap(), "#112233");
        assert_eq!(normalize_hex("#A1B2C3").unwrap(), "#a1b2c3");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#12", "#1234", "#12345g", "not-a-color", "##123456", "#1234567"] {
            assert!(
                matches!(hex_to_hsv(bad), Err(EditorError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_degenerate_hsv_is_canonical() {
        let white = hex_to_hsv("#ffffff").unwrap();
        assert_eq!(white, Hsv { h: 0.0, s: 0.0, v: 1.0 });

        let black = hex_to_hsv("#000000").unwrap();
        assert_eq!(black, Hsv { h: 0.0, s: 0.0, v: 0.0 });

        let grey = hex_to_hsv("#777777").unwrap();
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
    }

    #[test]
    fn test_hex_to_hsv_values() {
        let hsv = hex_to_hsv("#00ff00").unwrap();
        assert!((hsv.h - 120.0).abs() < 1e-9);
        assert!((hsv.s - 1.0).abs() < 1e-9);
        assert!((hsv.v - 1.0).abs() < 1e-9);

        let hsv = hex_to_hsv("#ff00ff").unwrap();
        assert!((hsv.h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_non_degenerate() {
        for hex in ["#112233", "#ff512f", "#dd2476", "#2193b0", "#6dd5ed", "#834d9b", "#010203", "#fe0001"] {
            let hsv = hex_to_hsv(hex).unwrap();
            assert_eq!(hsv.to_hex(), hex);
        }
    }

    #[test]
    fn test_full_hex_detection() {
        assert!(is_full_hex("#a1b2c3"));
        assert!(is_full_hex("a1b2c3"));
        assert!(!is_full_hex("#a1b"));
        assert!(!is_full_hex("#a1b2c"));
        assert!(!is_full_hex("#a1b2cz"));
    }

    #[test]
    fn test_nan_inputs_do_not_poison() {
        assert_eq!(hsv_to_hex(f64::NAN, f64::NAN, 1.0), "#ffffff");
    }

    #[test]
    fn test_peniko_bridge() {
        let rgb = Rgb::new(12, 34, 56);
        let color: Color = rgb.into();
        assert_eq!(Rgb::from(color), rgb);
    }
}
