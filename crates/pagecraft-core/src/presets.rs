//! Built-in presets: gradients, paper textures, fonts and quick colors.

/// Named gradient backgrounds.
pub const GRADIENTS: &[(&str, &str)] = &[
    ("sunset", "linear-gradient(to right, #ff512f, #dd2476)"),
    ("ocean", "linear-gradient(to right, #2193b0, #6dd5ed)"),
    ("forest", "linear-gradient(to right, #134e5e, #71b280)"),
    ("lavender", "linear-gradient(to right, #834d9b, #d04ed6)"),
    ("desert", "linear-gradient(to right, #eb5757, #000000)"),
];

const TEXTURES: &str = "https://www.transparenttextures.com/patterns";

/// Named paper textures, as `(name, file)`; `None` is plain paper.
const PAPER_FILES: &[(&str, Option<&str>)] = &[
    ("white", None),
    ("carbon", Some("carbon-fibre.png")),
    ("circles", Some("circles.png")),
    ("concrete", Some("concrete-wall.png")),
    ("cream", Some("cream-paper.png")),
    ("crossword", Some("crossword.png")),
    ("diagonal", Some("diagonal-striped-brick.png")),
    ("fabric", Some("fabric-of-squares.png")),
    ("grid", Some("grid-me.png")),
    ("leather", Some("leather.png")),
    ("notebook", Some("notebook.png")),
    ("pixels", Some("pixels.png")),
    ("squares", Some("squares.png")),
    ("waves", Some("waves.png")),
    ("wood", Some("wood-pattern.png")),
];

/// Named paper textures as `(name, paint value)`.
pub fn papers() -> Vec<(&'static str, String)> {
    PAPER_FILES
        .iter()
        .map(|(name, file)| {
            let value = match file {
                Some(file) => format!("url(\"{TEXTURES}/{file}\")"),
                None => crate::background::NO_PAINT.to_string(),
            };
            (*name, value)
        })
        .collect()
}

/// Paint value of a named paper texture.
pub fn paper(name: &str) -> Option<String> {
    papers().into_iter().find(|(n, _)| *n == name).map(|(_, v)| v)
}

/// Paint value of a named gradient.
pub fn gradient(name: &str) -> Option<&'static str> {
    GRADIENTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

pub const FONTS: &[&str] = &[
    "Inter",
    "Playfair Display",
    "Montserrat",
    "Lora",
    "Roboto",
    "Open Sans",
    "Source Sans Pro",
    "Merriweather",
    "Poppins",
    "Raleway",
    "Nunito",
    "Quicksand",
    "Fira Sans",
    "Ubuntu",
    "Josefin Sans",
];

pub const FONT_SIZES: &[u32] = &[12, 14, 16, 18, 20, 24, 28, 32, 36, 48];

/// Swatches offered below the shade square.
pub const QUICK_COLORS: &[&str] = &[
    "#ffffff", "#000000", "#ff0000", "#00ff00", "#0000ff",
    "#ffff00", "#ff00ff", "#00ffff", "#808080", "#c0c0c0",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(gradient("ocean"), Some("linear-gradient(to right, #2193b0, #6dd5ed)"));
        assert_eq!(paper("white").as_deref(), Some("none"));
        assert_eq!(
            paper("wood").as_deref(),
            Some("url(\"https://www.transparenttextures.com/patterns/wood-pattern.png\")")
        );
        assert!(paper("marble").is_none());
    }

    #[test]
    fn test_counts() {
        assert_eq!(papers().len(), 15);
        assert_eq!(FONTS.len(), 15);
        assert!(FONT_SIZES.contains(&crate::style::DEFAULT_FONT_SIZE));
        assert!(QUICK_COLORS.iter().all(|c| crate::color::is_full_hex(c)));
    }
}
