//! Random harmonious gradient backgrounds.

use crate::color::{clamp_unit, wrap_hue, Rgb};
use crate::seed::SeedStream;

/// Directions a generated gradient may run in.
pub const GRADIENT_DIRECTIONS: &[&str] = &[
    "to right",
    "to bottom right",
    "to bottom",
    "to bottom left",
    "135deg",
    "-45deg",
    "45deg",
];

/// Generate a `linear-gradient(...)` paint value from `seed`.
///
/// Uses 2 to 4 stops whose hues are spread evenly around the circle from a
/// random base hue, with saturation in 60..100 % and lightness in 40..70 %.
/// The same seed always yields the same gradient.
pub fn generate_gradient(seed: u32) -> String {
    let mut rng = SeedStream::new(seed);
    let stop_count = 2 + rng.next_index(3);
    let base_hue = rng.next_unit() * 360.0;

    let stops: Vec<String> = (0..stop_count)
        .map(|i| {
            let hue = wrap_hue(base_hue + i as f64 * (360.0 / stop_count as f64));
            let saturation = 0.6 + rng.next_unit() * 0.4;
            let lightness = 0.4 + rng.next_unit() * 0.3;
            let color = hsl_to_rgb(hue, saturation, lightness).to_hex();
            let percent = i as f64 / (stop_count - 1) as f64 * 100.0;
            format!("{color} {}%", format_percent(percent))
        })
        .collect();

    let direction = GRADIENT_DIRECTIONS[rng.next_index(GRADIENT_DIRECTIONS.len())];
    format!("linear-gradient({direction}, {})", stops.join(", "))
}

/// Convert HSL (hue in degrees, saturation and lightness in `0..=1`) to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = wrap_hue(h);
    let s = clamp_unit(s);
    let l = clamp_unit(l);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

fn format_percent(p: f64) -> String {
    if p.fract() == 0.0 {
        format!("{}", p as u32)
    } else {
        format!("{p}")
    }
}
