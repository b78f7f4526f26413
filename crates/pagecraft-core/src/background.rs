//! Document background descriptor.

use serde::{Deserialize, Serialize};

/// Sentinel paint value meaning "no background image".
pub const NO_PAINT: &str = "none";

/// Default background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Kind of background paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Gradient,
    Paper,
    #[default]
    Color,
    Pattern,
}

/// The document background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub kind: BackgroundKind,
    /// Authoritative only for [`BackgroundKind::Color`]; otherwise the last
    /// chosen color, kept as a fallback for switching back.
    pub color: String,
    /// CSS-like paint: a gradient function, a tiled image reference or `"none"`.
    pub value: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Color,
            color: DEFAULT_BACKGROUND_COLOR.to_string(),
            value: NO_PAINT.to_string(),
        }
    }
}

/// Resolved paint properties for rendering or printing the background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundPaint {
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_repeat: Option<&'static str>,
}

impl Background {
    /// Resolve to paint properties. The color always paints underneath.
    pub fn paint(&self) -> BackgroundPaint {
        let mut paint = BackgroundPaint {
            background_color: self.color.clone(),
            background_image: None,
            background_size: None,
            background_repeat: None,
        };

        if self.value == NO_PAINT {
            return paint;
        }

        match self.kind {
            BackgroundKind::Color => {}
            BackgroundKind::Gradient => {
                paint.background_image = Some(self.value.clone());
                paint.background_size = Some("100% 100%");
                paint.background_repeat = Some("no-repeat");
            }
            BackgroundKind::Paper => {
                paint.background_image = Some(self.value.clone());
                paint.background_size = Some("auto");
                paint.background_repeat = Some("repeat");
            }
            BackgroundKind::Pattern => {
                paint.background_image = Some(css_url(&self.value));
                paint.background_size = Some("cover");
                paint.background_repeat = Some("repeat");
            }
        }
        paint
    }
}

/// Wrap an image payload in `url("...")` unless it already is one.
///
/// Quotes, backslashes and line breaks are escaped so the result stays one
/// CSS string token.
pub fn css_url(payload: &str) -> String {
    if payload.starts_with("url(") {
        return payload.to_string();
    }
    let mut out = String::with_capacity(payload.len() + 7);
    out.push_str("url(\"");
    for c in payload.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out.push_str("\")");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_white() {
        let paint = Background::default().paint();
        assert_eq!(paint.background_color, "#ffffff");
        assert!(paint.background_image.is_none());
    }

    #[test]
    fn test_gradient_paint() {
        let bg = Background {
            kind: BackgroundKind::Gradient,
            color: "#ffffff".to_string(),
            value: "linear-gradient(to right, #2193b0, #6dd5ed)".to_string(),
        };
        let paint = bg.paint();
        assert_eq!(paint.background_image.as_deref(), Some(bg.value.as_str()));
        assert_eq!(paint.background_repeat, Some("no-repeat"));
    }

    #[test]
    fn test_paper_none_has_no_image() {
        let bg = Background {
            kind: BackgroundKind::Paper,
            color: "#fafafa".to_string(),
            value: NO_PAINT.to_string(),
        };
        assert!(bg.paint().background_image.is_none());
    }

    #[test]
    fn test_pattern_wraps_payload() {
        let bg = Background {
            kind: BackgroundKind::Pattern,
            color: "#ffffff".to_string(),
            value: "data:image/svg+xml;base64,AAAA".to_string(),
        };
        assert_eq!(
            bg.paint().background_image.as_deref(),
            Some("url(\"data:image/svg+xml;base64,AAAA\")")
        );
        assert_eq!(css_url("url(\"x\")"), "url(\"x\")");
    }

    #[test]
    fn test_css_url_escapes_quotes() {
        assert_eq!(css_url(r#"a"b\c"#), r#"url("a\"b\\c")"#);
        assert_eq!(css_url("a\nb"), "url(\"a\\a b\")");
    }
}
