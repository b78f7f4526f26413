//! Overlays: free text blocks, images and icons layered over the document.

use super::EntityId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Kind of overlay. Each kind is placed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Text,
    Image,
    Icon,
}

impl OverlayKind {
    pub fn name(&self) -> &'static str {
        match self {
            OverlayKind::Text => "text",
            OverlayKind::Image => "image",
            OverlayKind::Icon => "icon",
        }
    }
}

/// Rendering attributes of an icon overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconAttributes {
    /// Registry name of the icon.
    pub name: String,
    /// Icon size in pixels.
    pub size: f64,
    pub stroke_width: f64,
    /// Outline color.
    pub color: String,
    /// Fill color.
    pub fill: String,
}

/// An overlay placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub(crate) id: EntityId,
    pub kind: OverlayKind,
    /// Text for text overlays, an image payload for images, unused for icons.
    pub content: String,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconAttributes>,
}

impl Overlay {
    pub fn id(&self) -> EntityId {
        self.id
    }
}

/// An overlay before the store assigns its id and position.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOverlay {
    pub kind: OverlayKind,
    pub content: String,
    pub icon: Option<IconAttributes>,
}

impl NewOverlay {
    pub fn text(content: impl Into<String>) -> Self {
        Self { kind: OverlayKind::Text, content: content.into(), icon: None }
    }

    pub fn image(payload: impl Into<String>) -> Self {
        Self { kind: OverlayKind::Image, content: payload.into(), icon: None }
    }

    pub fn icon(attributes: IconAttributes) -> Self {
        Self { kind: OverlayKind::Icon, content: String::new(), icon: Some(attributes) }
    }

    pub(crate) fn into_overlay(self, id: EntityId, position: Point) -> Overlay {
        Overlay {
            id,
            kind: self.kind,
            content: self.content,
            position,
            icon: self.icon,
        }
    }
}
