//! Freeform text box.

use super::EntityId;
use crate::style::{TextStyle, TextStylePatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A draggable text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub(crate) id: EntityId,
    /// Plain text content.
    pub content: String,
    /// Top-left corner relative to the document origin.
    pub position: Point,
    /// Per-entity style.
    pub style: TextStyle,
}

impl TextBox {
    /// Create an empty text box.
    pub(crate) fn new(id: EntityId, position: Point, style: TextStyle) -> Self {
        Self {
            id,
            content: String::new(),
            position,
            style,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Merge a partial update. Returns true if the style was touched.
    pub(crate) fn apply(&mut self, patch: TextBoxPatch) -> bool {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        match patch.style {
            Some(style) if !style.is_empty() => {
                self.style.apply(&style);
                true
            }
            _ => false,
        }
    }
}

/// Partial update of a [`TextBox`]. The id is never patchable.
#[derive(Debug, Clone, Default)]
pub struct TextBoxPatch {
    pub content: Option<String>,
    pub position: Option<Point>,
    pub style: Option<TextStylePatch>,
}

impl TextBoxPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), ..Default::default() }
    }

    pub fn position(position: Point) -> Self {
        Self { position: Some(position), ..Default::default() }
    }

    pub fn style(style: TextStylePatch) -> Self {
        Self { style: Some(style), ..Default::default() }
    }
}
