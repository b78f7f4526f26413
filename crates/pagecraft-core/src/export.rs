//! Read-only document view for printing and export.

use crate::background::BackgroundPaint;
use crate::entities::{Overlay, TextBox};
use serde::Serialize;

/// Everything an exporter needs to render the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub background: BackgroundPaint,
    pub text_boxes: Vec<TextBox>,
    pub overlays: Vec<Overlay>,
}

impl ExportSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn is_empty(&self) -> bool {
        self.text_boxes.is_empty() && self.overlays.is_empty()
    }
}
