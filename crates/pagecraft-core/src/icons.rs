//! Icon registry: maps icon names to renderable shape descriptors.

use crate::entities::IconAttributes;
use crate::error::{EditorError, EditorResult};
use std::collections::BTreeMap;

/// Size of the square view box icon paths are drawn in.
pub const ICON_VIEW_BOX: f64 = 24.0;

/// A renderable icon outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconShape {
    pub name: String,
    /// SVG path data in a [`ICON_VIEW_BOX`] square.
    pub path: String,
}

impl IconShape {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into() }
    }

    /// Render as a standalone SVG document with the given attributes.
    pub fn to_svg(&self, attrs: &IconAttributes) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {vb} {vb}" fill="{fill}" stroke="{color}" stroke-width="{sw}" stroke-linecap="round" stroke-linejoin="round"><path d="{path}"/></svg>"#,
            size = attrs.size,
            vb = ICON_VIEW_BOX,
            fill = attrs.fill,
            color = attrs.color,
            sw = attrs.stroke_width,
            path = self.path,
        )
    }
}

/// Name-keyed set of icons.
///
/// Names are resolved once, when an icon overlay is added; an unknown name is
/// a recoverable [`EditorError::UnknownIcon`].
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: BTreeMap<String, IconShape>,
}

impl IconRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in icon set.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for (name, path) in BUILTIN_ICONS {
            registry.register(IconShape::new(*name, *path));
        }
        registry
    }

    /// Register an icon, replacing any icon with the same name.
    pub fn register(&mut self, shape: IconShape) {
        self.icons.insert(shape.name.clone(), shape);
    }

    /// Look up an icon by name.
    pub fn resolve(&self, name: &str) -> EditorResult<&IconShape> {
        self.icons
            .get(name)
            .ok_or_else(|| EditorError::UnknownIcon(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Icon names containing `query`, case-insensitively, in name order.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.icons
            .keys()
            .filter(|name| name.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("Circle", "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z"),
    ("Square", "M3 3h18v18H3z"),
    ("Triangle", "M12 3L22 20H2z"),
    ("Star", "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"),
    ("Heart", "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z"),
    ("ArrowRight", "M5 12h14M12 5l7 7-7 7"),
    ("Check", "M20 6L9 17l-5-5"),
    ("Plus", "M12 5v14M5 12h14"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(name: &str) -> IconAttributes {
        IconAttributes {
            name: name.to_string(),
            size: 40.0,
            stroke_width: 2.0,
            color: "#000000".to_string(),
            fill: "#ffffff".to_string(),
        }
    }

    #[test]
    fn test_resolve_builtin() {
        let registry = IconRegistry::with_builtin();
        assert!(registry.resolve("Star").is_ok());
        assert_eq!(
            registry.resolve("Unicorn"),
            Err(EditorError::UnknownIcon("Unicorn".to_string()))
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let registry = IconRegistry::with_builtin();
        assert_eq!(registry.search("ar"), vec!["ArrowRight", "Heart", "Square", "Star"]);
        assert_eq!(registry.search("").len(), registry.len());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = IconRegistry::new();
        registry.register(IconShape::new("Dot", "M12 12h0"));
        registry.register(IconShape::new("Dot", "M11 11h2"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("Dot").unwrap().path, "M11 11h2");
    }

    #[test]
    fn test_svg_carries_attributes() {
        let registry = IconRegistry::with_builtin();
        let svg = registry.resolve("Check").unwrap().to_svg(&attrs("Check"));
        assert!(svg.contains(r#"width="40""#));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains("M20 6L9 17l-5-5"));
    }
}
