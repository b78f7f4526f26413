//! Editor configuration: presets and defaults, loadable from JSON.

use crate::background::{Background, BackgroundKind};
use crate::color::normalize_hex;
use crate::error::{EditorError, EditorResult};
use crate::picker::{HUE_STRIP_SIZE, SHADE_SQUARE_SIZE};
use crate::presets;
use crate::style::TextStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Editor presets and defaults.
///
/// Every field is optional in JSON; missing fields take the built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub fonts: Vec<String>,
    pub font_sizes: Vec<u32>,
    /// Style of the first text box before any toolbar change.
    pub default_text_style: TextStyle,
    pub default_background: Background,
    /// `(name, paint value)` pairs.
    pub gradients: Vec<(String, String)>,
    /// `(name, paint value)` pairs.
    pub papers: Vec<(String, String)>,
    pub quick_colors: Vec<String>,
    /// Hue strip canvas `(width, height)`.
    pub hue_strip_size: (f64, f64),
    /// Shade square canvas `(width, height)`.
    pub shade_square_size: (f64, f64),
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fonts: presets::FONTS.iter().map(|f| f.to_string()).collect(),
            font_sizes: presets::FONT_SIZES.to_vec(),
            default_text_style: TextStyle::default(),
            default_background: Background::default(),
            gradients: presets::GRADIENTS
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            papers: presets::papers()
                .into_iter()
                .map(|(n, v)| (n.to_string(), v))
                .collect(),
            quick_colors: presets::QUICK_COLORS.iter().map(|c| c.to_string()).collect(),
            hue_strip_size: HUE_STRIP_SIZE,
            shade_square_size: SHADE_SQUARE_SIZE,
        }
    }
}

impl EditorConfig {
    /// Parse from JSON and check the values.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config.normalized())
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> EditorResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| EditorError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, falling back to the defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Using default editor config: {}", err);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Paint value of a configured gradient.
    pub fn gradient(&self, name: &str) -> Option<&str> {
        self.gradients.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Paint value of a configured paper.
    pub fn paper(&self, name: &str) -> Option<&str> {
        self.papers.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Rewrite colors in the store's lowercase `#rrggbb` form.
    fn normalized(mut self) -> Self {
        let lower = |c: &mut String| {
            if let Ok(hex) = normalize_hex(c) {
                *c = hex;
            }
        };
        self.quick_colors.iter_mut().for_each(lower);
        lower(&mut self.default_text_style.text_color);
        lower(&mut self.default_background.color);
        if self.default_background.kind == BackgroundKind::Color {
            lower(&mut self.default_background.value);
        }
        self
    }

    fn validate(&self) -> EditorResult<()> {
        if self.default_text_style.font_size == 0 || self.font_sizes.contains(&0) {
            return Err(EditorError::Config("font sizes must be positive".into()));
        }
        for color in self
            .quick_colors
            .iter()
            .chain([&self.default_text_style.text_color, &self.default_background.color])
        {
            if !crate::color::is_full_hex(color) {
                return Err(EditorError::Config(format!("invalid color {color:?}")));
            }
        }
        let sizes = [self.hue_strip_size, self.shade_square_size];
        if sizes.iter().any(|(w, h)| !(*w > 0.0 && *h > 0.0)) {
            return Err(EditorError::Config("canvas sizes must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_presets() {
        let config = EditorConfig::default();
        assert_eq!(config.fonts.len(), 15);
        assert_eq!(config.font_sizes.len(), 10);
        assert_eq!(config.gradients.len(), 5);
        assert_eq!(config.papers.len(), 15);
        assert_eq!(config.paper("white"), Some("none"));
        assert_eq!(config.gradient("sunset"), presets::gradient("sunset"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "fonts": ["Lora"], "fontSizes": [10, 20] }"#).unwrap();
        assert_eq!(config.fonts, vec!["Lora".to_string()]);
        assert_eq!(config.font_sizes, vec![10, 20]);
        assert_eq!(config.quick_colors.len(), 10);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "quickColors": ["red"] }"#),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "fontSizes": [0] }"#),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(EditorConfig::from_json("not json"), Err(EditorError::Config(_))));
    }

    #[test]
    fn test_colors_are_normalized() {
        let config = EditorConfig::from_json(
            r##"{
                "quickColors": ["AABBCC"],
                "defaultTextStyle": { "isBold": false, "isItalic": false, "isUnderline": false,
                    "fontFamily": "Inter", "fontSize": 16, "textColor": "112233" },
                "defaultBackground": { "kind": "color", "color": "#FFEEDD", "value": "#FFEEDD" }
            }"##,
        )
        .unwrap();
        assert_eq!(config.quick_colors, vec!["#aabbcc".to_string()]);
        assert_eq!(config.default_text_style.text_color, "#112233");
        assert_eq!(config.default_background.color, "#ffeedd");
        assert_eq!(config.default_background.value, "#ffeedd");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{ "defaultTextStyle": {{ "isBold": true, "isItalic": false, "isUnderline": false, "fontFamily": "Lora", "fontSize": 20, "textColor": "#112233" }} }}"##).unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.default_text_style.font_family, "Lora");
        assert!(config.default_text_style.is_bold);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(EditorConfig::load(&path), Err(EditorError::Config(_))));
        assert_eq!(EditorConfig::load_or_default(&path), EditorConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = EditorConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(EditorConfig::from_json(&json).unwrap(), config);
    }
}
