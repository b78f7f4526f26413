//! Background pattern generation.
//!
//! Generators return two opaque image payloads: a small thumbnail for the
//! preset picker and the full-size image stored on the background.

use crate::seed::{fresh_seed, SeedStream};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Family of generated patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// Seeded geometric tiles.
    #[default]
    Geopatterns,
    /// Hand-drawn doodle tiles.
    Doodles,
}

/// Image payloads produced by a [`PatternGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPattern {
    pub thumbnail: String,
    pub full: String,
}

/// Source of pattern images.
pub trait PatternGenerator {
    fn generate(&mut self, mode: PatternMode) -> GeneratedPattern;
}

const DOODLES: &[&str] = &[
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="60"><circle cx="80" cy="30" r="25" fill="none" stroke="#222" stroke-width="2"/></svg>"##,
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="60"><path d="M0,30 Q80,0 160,30 Q80,60 0,30 Z" fill="none" stroke="#000" stroke-width="2"/></svg>"##,
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="60"><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-size="18" fill="#333">★</text></svg>"##,
];

/// Built-in generator: doodle tiles and seeded geometric tiles.
#[derive(Debug, Clone)]
pub struct DoodlePatterns {
    rng: SeedStream,
}

impl Default for DoodlePatterns {
    fn default() -> Self {
        Self::with_seed(fresh_seed())
    }
}

impl DoodlePatterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproducible generator, mainly for tests.
    pub fn with_seed(seed: u32) -> Self {
        Self { rng: SeedStream::new(seed) }
    }

    fn geometric_tile(&mut self) -> String {
        let hue = self.rng.next_unit() * 360.0;
        let base = crate::gradient::hsl_to_rgb(hue, 0.5, 0.45).to_hex();
        let cell = 20 + self.rng.next_index(5) as u32 * 4;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{w}"><rect width="100%" height="100%" fill="{base}"/>"#,
            w = cell * 6
        );
        for row in 0..6 {
            for col in 0..6 {
                let opacity = 0.02 + self.rng.next_unit() * 0.13;
                let fill = if (row + col) % 2 == 0 { "#ddd" } else { "#222" };
                svg.push_str(&format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" fill-opacity="{opacity:.3}"/>"#,
                    cx = col * cell + cell / 2,
                    cy = row * cell + cell / 2,
                    r = cell / 2,
                ));
            }
        }
        svg.push_str("</svg>");
        svg_data_uri(&svg)
    }
}

impl PatternGenerator for DoodlePatterns {
    fn generate(&mut self, mode: PatternMode) -> GeneratedPattern {
        match mode {
            PatternMode::Geopatterns => {
                let encoded = self.geometric_tile();
                GeneratedPattern { thumbnail: encoded.clone(), full: encoded }
            }
            PatternMode::Doodles => {
                let url = svg_data_uri(DOODLES[self.rng.next_index(DOODLES.len())]);
                GeneratedPattern { thumbnail: url.clone(), full: url }
            }
        }
    }
}

/// Base64 `data:` URI for an SVG document.
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// Empty pattern used when a generator has nothing to offer.
pub fn blank_pattern() -> GeneratedPattern {
    GeneratedPattern {
        thumbnail: svg_data_uri(r#"<svg width="160" height="60"/>"#),
        full: svg_data_uri(r#"<svg width="1240" height="1748"/>"#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_doodles_come_from_builtin_set() {
        let mut generator = DoodlePatterns::with_seed(3);
        for _ in 0..10 {
            let pattern = generator.generate(PatternMode::Doodles);
            let payload = pattern
                .full
                .strip_prefix("data:image/svg+xml;base64,")
                .unwrap();
            let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
            assert!(DOODLES.contains(&svg.as_str()));
            assert_eq!(pattern.thumbnail, pattern.full);
        }
    }

    #[test]
    fn test_geopatterns_are_base64_svg() {
        let mut generator = DoodlePatterns::with_seed(11);
        let pattern = generator.generate(PatternMode::Geopatterns);
        let payload = pattern
            .full
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap();
        let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_blank_pattern() {
        let blank = blank_pattern();
        assert_eq!(
            blank.thumbnail,
            "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTYwIiBoZWlnaHQ9IjYwIi8+"
        );
        assert_ne!(blank.thumbnail, blank.full);
    }
}
