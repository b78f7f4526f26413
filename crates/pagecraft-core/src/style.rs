//! Text styling: per-entity style, toolbar (active) style and partial updates.

use crate::color::normalize_hex;
use crate::error::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};

/// Default font family for new text.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 16;
/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Bold/italic/underline toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatFlags {
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underline: bool,
}

impl FormatFlags {
    /// Apply only the fields present in `patch`.
    pub fn apply(&mut self, patch: FormatPatch) {
        if let Some(bold) = patch.is_bold {
            self.is_bold = bold;
        }
        if let Some(italic) = patch.is_italic {
            self.is_italic = italic;
        }
        if let Some(underline) = patch.is_underline {
            self.is_underline = underline;
        }
    }
}

/// Partial update of [`FormatFlags`]; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatPatch {
    pub is_bold: Option<bool>,
    pub is_italic: Option<bool>,
    pub is_underline: Option<bool>,
}

impl FormatPatch {
    pub fn bold(value: bool) -> Self {
        Self { is_bold: Some(value), ..Default::default() }
    }

    pub fn italic(value: bool) -> Self {
        Self { is_italic: Some(value), ..Default::default() }
    }

    pub fn underline(value: bool) -> Self {
        Self { is_underline: Some(value), ..Default::default() }
    }
}

/// Style of a single text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underline: bool,
    pub font_family: String,
    /// Font size in pixels, always positive.
    pub font_size: u32,
    /// Lowercase `#rrggbb`.
    pub text_color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            is_bold: false,
            is_italic: false,
            is_underline: false,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

impl TextStyle {
    pub fn flags(&self) -> FormatFlags {
        FormatFlags {
            is_bold: self.is_bold,
            is_italic: self.is_italic,
            is_underline: self.is_underline,
        }
    }

    pub fn set_flags(&mut self, flags: FormatFlags) {
        self.is_bold = flags.is_bold;
        self.is_italic = flags.is_italic;
        self.is_underline = flags.is_underline;
    }

    /// Merge a partial style update.
    pub fn apply(&mut self, patch: &TextStylePatch) {
        let mut flags = self.flags();
        flags.apply(patch.format);
        self.set_flags(flags);

        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(color) = &patch.text_color {
            self.text_color = color.clone();
        }
    }

    /// CSS-like declarations for rendering or printing this style.
    pub fn to_css(&self) -> String {
        format!(
            "font-family: {}; font-size: {}px; color: {}; font-weight: {}; font-style: {}; text-decoration: {}",
            self.font_family,
            self.font_size,
            self.text_color,
            if self.is_bold { "bold" } else { "normal" },
            if self.is_italic { "italic" } else { "normal" },
            if self.is_underline { "underline" } else { "none" },
        )
    }
}

/// Partial update of a [`TextStyle`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStylePatch {
    pub format: FormatPatch,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub text_color: Option<String>,
}

impl TextStylePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check the patch against the style rules and normalize its color.
    ///
    /// A zero font size, a blank family or an unparsable color rejects the
    /// whole patch.
    pub fn validated(mut self) -> EditorResult<Self> {
        if self.font_size == Some(0) {
            return Err(EditorError::InvalidStyle("font size must be positive".into()));
        }
        if let Some(family) = self.font_family.take() {
            let family = family.trim();
            if family.is_empty() {
                return Err(EditorError::InvalidStyle("empty font family".into()));
            }
            self.font_family = Some(family.to_string());
        }
        if let Some(color) = self.text_color.take() {
            self.text_color = Some(normalize_hex(&color)?);
        }
        Ok(self)
    }
}

/// The style shown in the toolbar.
///
/// While a text box is selected this mirrors that box's style field for
/// field; otherwise it is the style given to the next created text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveStyle {
    pub font_family: String,
    pub font_size: u32,
    pub text_color: String,
    pub text_style: FormatFlags,
}

impl Default for ActiveStyle {
    fn default() -> Self {
        Self::from(&TextStyle::default())
    }
}

impl From<&TextStyle> for ActiveStyle {
    fn from(style: &TextStyle) -> Self {
        Self {
            font_family: style.font_family.clone(),
            font_size: style.font_size,
            text_color: style.text_color.clone(),
            text_style: style.flags(),
        }
    }
}

impl ActiveStyle {
    /// Build the per-entity style this toolbar state describes.
    pub fn to_text_style(&self) -> TextStyle {
        let mut style = TextStyle {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            text_color: self.text_color.clone(),
            ..TextStyle::default()
        };
        style.set_flags(self.text_style);
        style
    }

    /// Whether this toolbar state equals `style` field for field.
    pub fn matches(&self, style: &TextStyle) -> bool {
        self.font_family == style.font_family
            && self.font_size == style.font_size
            && self.text_color == style.text_color
            && self.text_style == style.flags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_patch() {
        let patch = TextStylePatch {
            font_family: Some("  Lora ".into()),
            text_color: Some("ABC".into()),
            ..Default::default()
        }
        .validated()
        .unwrap();
        assert_eq!(patch.font_family.as_deref(), Some("Lora"));
        assert_eq!(patch.text_color.as_deref(), Some("#aabbcc"));

        let zero = TextStylePatch { font_size: Some(0), ..Default::default() };
        assert!(matches!(zero.validated(), Err(EditorError::InvalidStyle(_))));
        let blank = TextStylePatch { font_family: Some(" ".into()), ..Default::default() };
        assert!(matches!(blank.validated(), Err(EditorError::InvalidStyle(_))));
        let red = TextStylePatch { text_color: Some("red".into()), ..Default::default() };
        assert!(matches!(red.validated(), Err(EditorError::InvalidColor(_))));
    }

    #[test]
    fn test_format_patch_only_touches_present_fields() {
        let mut flags = FormatFlags { is_bold: true, is_italic: false, is_underline: true };
        flags.apply(FormatPatch::italic(true));
        assert_eq!(flags, FormatFlags { is_bold: true, is_italic: true, is_underline: true });
    }

    #[test]
    fn test_style_patch_merge() {
        let mut style = TextStyle::default();
        style.apply(&TextStylePatch {
            font_size: Some(24),
            text_color: Some("#112233".to_string()),
            format: FormatPatch::bold(true),
            ..Default::default()
        });
        assert_eq!(style.font_size, 24);
        assert_eq!(style.text_color, "#112233");
        assert!(style.is_bold);
        assert_eq!(style.font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_active_style_round_trip() {
        let mut style = TextStyle::default();
        style.is_underline = true;
        style.font_family = "Lora".to_string();
        let active = ActiveStyle::from(&style);
        assert!(active.matches(&style));
        assert_eq!(active.to_text_style(), style);
    }

    #[test]
    fn test_css() {
        let mut style = TextStyle::default();
        style.is_bold = true;
        let css = style.to_css();
        assert!(css.contains("font-size: 16px"));
        assert!(css.contains("font-weight: bold"));
        assert!(css.contains("text-decoration: none"));
    }
}
